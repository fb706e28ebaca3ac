//! Per-day tail capacity ledger.
//!
//! Tracks how many pilot pairs have been placed on each tail for each day
//! of a generation run. Absent keys read as zero. The ledger is append-only
//! for the duration of one run and rebuilt fresh on the next; there is no
//! removal operation.

use chrono::NaiveDate;
use std::collections::HashMap;

/// Default capacity: one pair (two pilots) per tail per day.
pub const MAX_PAIRS_PER_TAIL_PER_DAY: u32 = 1;

/// Counts pairs placed per (date, tail) and enforces the per-day cap.
#[derive(Debug, Clone)]
pub struct TailCapacityLedger {
    used: HashMap<(NaiveDate, String), u32>,
    pairs_per_day: u32,
}

impl TailCapacityLedger {
    /// Creates a ledger with the default one-pair-per-tail-per-day cap.
    pub fn new() -> Self {
        Self::with_pairs_per_day(MAX_PAIRS_PER_TAIL_PER_DAY)
    }

    /// Creates a ledger with a custom pairs-per-tail-per-day cap.
    pub fn with_pairs_per_day(pairs_per_day: u32) -> Self {
        Self {
            used: HashMap::new(),
            pairs_per_day,
        }
    }

    /// Pairs already placed on a tail for a day. Absent keys read as zero.
    pub fn pairs_used(&self, date: NaiveDate, tail_number: &str) -> u32 {
        self.used
            .get(&(date, tail_number.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Whether the tail can take another pair on this day.
    pub fn has_capacity(&self, date: NaiveDate, tail_number: &str) -> bool {
        self.pairs_used(date, tail_number) < self.pairs_per_day
    }

    /// Records one more pair on the tail for the day and returns the new count.
    pub fn reserve_pair(&mut self, date: NaiveDate, tail_number: &str) -> u32 {
        let count = self
            .used
            .entry((date, tail_number.to_string()))
            .or_insert(0);
        *count += 1;
        *count
    }
}

impl Default for TailCapacityLedger {
    fn default() -> Self {
        Self::new()
    }
}
