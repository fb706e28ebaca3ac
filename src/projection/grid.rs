//! Tail-by-day grid projection.
//!
//! One row per configured tail, one column per day in the window; each cell
//! lists the comma-joined names of the ON pilots crewing that tail that day.
//! OFF assignments carry no tail and never populate a row; the EXTRA
//! overflow bucket has no row. Blank tail numbers are excluded.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{RotationPlan, Tail};

/// One day column of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    /// Calendar date of the column.
    pub date: NaiveDate,
    /// Header label: the day of month.
    pub label: String,
}

/// One tail row of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailRow {
    /// Tail number for the row header.
    pub tail_number: String,
    /// The tail's display color.
    pub color_hex: String,
    /// One cell per day column: comma-joined pilot names, empty when idle.
    pub cells: Vec<String>,
}

/// The tail-by-day grid view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailGrid {
    /// Day columns, in window order.
    pub day_columns: Vec<DayColumn>,
    /// Tail rows, in fleet order.
    pub rows: Vec<TailRow>,
}

impl TailGrid {
    /// Builds the grid for a window from a generated plan.
    ///
    /// Columns come from `start_date` and `days` (not from the plan), so an
    /// empty plan still renders the full empty grid.
    pub fn build(plan: &RotationPlan, tails: &[Tail], start_date: NaiveDate, days: u32) -> Self {
        let day_columns: Vec<DayColumn> = (0..days)
            .map(|i| {
                let date = start_date + Duration::days(i64::from(i));
                DayColumn {
                    date,
                    label: date.day().to_string(),
                }
            })
            .collect();

        let mut cell_map: HashMap<(NaiveDate, &str), Vec<&str>> = HashMap::new();
        for a in plan.iter() {
            if !a.status.is_on() {
                continue;
            }
            cell_map
                .entry((a.date, a.tail_number.as_str()))
                .or_default()
                .push(a.pilot_name.as_str());
        }

        let rows = tails
            .iter()
            .filter(|t| !t.tail_number.trim().is_empty())
            .map(|t| {
                let cells = day_columns
                    .iter()
                    .map(|col| {
                        cell_map
                            .get(&(col.date, t.tail_number.as_str()))
                            .map(|names| names.join(", "))
                            .unwrap_or_default()
                    })
                    .collect();
                TailRow {
                    tail_number: t.tail_number.clone(),
                    color_hex: t.color_hex.clone(),
                    cells,
                }
            })
            .collect();

        Self { day_columns, rows }
    }

    /// Looks up a row by tail number.
    pub fn row(&self, tail_number: &str) -> Option<&TailRow> {
        self.rows.iter().find(|r| r.tail_number == tail_number)
    }
}
