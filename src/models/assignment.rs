//! Assignment (output) model.
//!
//! A generation run emits exactly one `Assignment` per pilot per day in the
//! window. ON days carry a tail number (a configured tail or the EXTRA
//! overflow bucket); OFF days carry an empty tail. The `RotationPlan`
//! wrapper is immutable once produced; projections only read from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DutyStatus;

/// Overflow bucket for ON pilots that could not be matched to any tail.
///
/// Unlimited and never capacity-checked.
pub const EXTRA_TAIL: &str = "EXTRA";

/// One pilot's status and tail for one day.
///
/// Invariant: `status == Off` implies `tail_number` is empty, and
/// `status == On` implies `tail_number` is a configured tail or `EXTRA_TAIL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Calendar date of this record.
    pub date: NaiveDate,
    /// The pilot's roster name.
    pub pilot_name: String,
    /// ON or OFF for this day.
    pub status: DutyStatus,
    /// Assigned tail number; `EXTRA_TAIL` for overflow, empty for OFF days.
    pub tail_number: String,
}

impl Assignment {
    /// Creates an ON assignment.
    pub fn on(date: NaiveDate, pilot_name: impl Into<String>, tail_number: impl Into<String>) -> Self {
        Self {
            date,
            pilot_name: pilot_name.into(),
            status: DutyStatus::On,
            tail_number: tail_number.into(),
        }
    }

    /// Creates an OFF assignment (no tail).
    pub fn off(date: NaiveDate, pilot_name: impl Into<String>) -> Self {
        Self {
            date,
            pilot_name: pilot_name.into(),
            status: DutyStatus::Off,
            tail_number: String::new(),
        }
    }

    /// Whether this assignment landed in the overflow bucket.
    pub fn is_extra(&self) -> bool {
        self.tail_number == EXTRA_TAIL
    }
}

/// A complete generated rotation schedule for one window.
///
/// Row-major ordering: all assignments for day 0 (in roster pilot order)
/// precede day 1's, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationPlan {
    /// Flat assignment records, one per (pilot, day).
    pub assignments: Vec<Assignment>,
}

impl RotationPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignment records.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the plan has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates over assignments in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// Returns all assignments for a given pilot, in date order.
    pub fn assignments_for_pilot(&self, pilot_name: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.pilot_name == pilot_name)
            .collect()
    }

    /// Returns all assignments on a given date, in roster order.
    pub fn assignments_on(&self, date: NaiveDate) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.date == date).collect()
    }

    /// Names of ON pilots assigned to a tail on a date, in roster order.
    pub fn pilots_on_tail(&self, date: NaiveDate, tail_number: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|a| a.date == date && a.status.is_on() && a.tail_number == tail_number)
            .map(|a| a.pilot_name.as_str())
            .collect()
    }
}
