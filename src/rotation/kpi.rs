//! Plan summary statistics.
//!
//! Read-only counters derived from a finished plan: how many days each
//! pilot flies, how loaded each tail is, and how much of the roster spilled
//! into the EXTRA overflow bucket. Purely derived; computing a KPI never
//! changes the plan.

use std::collections::HashMap;

use crate::models::{RotationPlan, EXTRA_TAIL};

/// Summary counters for one generated plan.
#[derive(Debug, Clone)]
pub struct RotationKpi {
    /// Total assignment records (pilots x days).
    pub total_assignments: usize,
    /// ON-day records.
    pub on_count: usize,
    /// OFF-day records.
    pub off_count: usize,
    /// ON-day records that landed in the EXTRA overflow bucket.
    pub extra_count: usize,
    /// ON days per pilot.
    pub on_days_by_pilot: HashMap<String, u32>,
    /// Pilot-days per tail (two per pair-day), EXTRA excluded.
    pub pilot_days_by_tail: HashMap<String, u32>,
    /// Fraction of ON days that overflowed to EXTRA (0.0 when no ON days).
    pub extra_rate: f64,
}

impl RotationKpi {
    /// Computes the counters for a plan.
    pub fn calculate(plan: &RotationPlan) -> Self {
        let mut on_count = 0usize;
        let mut off_count = 0usize;
        let mut extra_count = 0usize;
        let mut on_days_by_pilot: HashMap<String, u32> = HashMap::new();
        let mut pilot_days_by_tail: HashMap<String, u32> = HashMap::new();

        for a in plan.iter() {
            if a.status.is_on() {
                on_count += 1;
                *on_days_by_pilot.entry(a.pilot_name.clone()).or_insert(0) += 1;
                if a.is_extra() {
                    extra_count += 1;
                } else {
                    *pilot_days_by_tail.entry(a.tail_number.clone()).or_insert(0) += 1;
                }
            } else {
                off_count += 1;
            }
        }

        let extra_rate = if on_count > 0 {
            extra_count as f64 / on_count as f64
        } else {
            0.0
        };

        Self {
            total_assignments: plan.len(),
            on_count,
            off_count,
            extra_count,
            on_days_by_pilot,
            pilot_days_by_tail,
            extra_rate,
        }
    }
}
