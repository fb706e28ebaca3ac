//! Duty cycle model.
//!
//! A pilot's availability follows a repeating ON-then-OFF pattern anchored
//! at the schedule window's start: `on_days` days of duty, then `off_days`
//! days off, repeating. Day 0 of a window is day 0 of the cycle for every
//! pilot; there is no per-pilot phase offset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duty status for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DutyStatus {
    /// On duty, eligible for tail assignment.
    On,
    /// Off duty, never assigned a tail.
    Off,
}

impl DutyStatus {
    /// Whether this is an ON day.
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, DutyStatus::On)
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DutyStatus::On => f.write_str("ON"),
            DutyStatus::Off => f.write_str("OFF"),
        }
    }
}

/// A repeating on-days/off-days rotation pattern.
///
/// The cycle length is clamped to at least one day, so `on_days = 0`
/// and `off_days = 0` resolves to a valid all-OFF cycle rather than a
/// division by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyCycle {
    /// Consecutive ON days at the start of each cycle.
    pub on_days: u32,
    /// Consecutive OFF days following the ON block.
    pub off_days: u32,
}

impl DutyCycle {
    /// Creates a new duty cycle.
    pub fn new(on_days: u32, off_days: u32) -> Self {
        Self { on_days, off_days }
    }

    /// Cycle length in days (at least 1).
    #[inline]
    pub fn len_days(&self) -> u32 {
        (self.on_days + self.off_days).max(1)
    }

    /// Status on a given day of the window, with day 0 at the window start.
    pub fn status_on_day(&self, day_index: u32) -> DutyStatus {
        let position = day_index % self.len_days();
        if position < self.on_days {
            DutyStatus::On
        } else {
            DutyStatus::Off
        }
    }
}
