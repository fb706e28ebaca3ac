//! Pilot model.
//!
//! A pilot is a roster entry: a unique name, a repeating duty cycle, and
//! an optional preferred tail. The roster order of pilots matters: ON
//! pilots are paired in that order during generation.

use serde::{Deserialize, Serialize};

use super::{DutyCycle, DutyStatus};

/// A pilot on the rotation roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// Unique pilot name.
    pub name: String,
    /// Consecutive ON days at the start of each cycle.
    pub on_days: u32,
    /// Consecutive OFF days following the ON block.
    pub off_days: u32,
    /// Preferred tail number. `None` (or blank) = no preference.
    #[serde(default)]
    pub preferred_tail: Option<String>,
}

impl Pilot {
    /// Creates a pilot with an empty (all-OFF) cycle and no preference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_days: 0,
            off_days: 0,
            preferred_tail: None,
        }
    }

    /// Sets the duty cycle.
    pub fn with_cycle(mut self, on_days: u32, off_days: u32) -> Self {
        self.on_days = on_days;
        self.off_days = off_days;
        self
    }

    /// Sets the preferred tail.
    pub fn with_preferred_tail(mut self, tail_number: impl Into<String>) -> Self {
        self.preferred_tail = Some(tail_number.into());
        self
    }

    /// This pilot's duty cycle.
    #[inline]
    pub fn cycle(&self) -> DutyCycle {
        DutyCycle::new(self.on_days, self.off_days)
    }

    /// Duty status on a given day of the window (day 0 = window start).
    pub fn status_on_day(&self, day_index: u32) -> DutyStatus {
        self.cycle().status_on_day(day_index)
    }

    /// Tail preference with blank strings treated as no preference.
    pub fn preference(&self) -> Option<&str> {
        self.preferred_tail
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
