//! Pair-to-tail assignment policy.
//!
//! Selects a tail for a pair of ON pilots. Decision order, first applicable
//! rule wins:
//!
//! 1. Both pilots share the same non-blank preferred tail with remaining
//!    capacity that day.
//! 2. Pilot A's preferred tail has remaining capacity.
//! 3. Pilot B's preferred tail has remaining capacity.
//! 4. Round-robin scan of all configured tails from a cursor shared across
//!    the whole generation run.
//! 5. No tail available anywhere: the EXTRA overflow bucket.
//!
//! A preference only counts if it names a configured tail. The cursor is
//! never reset per day, which makes the overflow distribution deterministic
//! but dependent on day order; a fresh policy value per generation run keeps
//! independent runs from interfering.

use chrono::NaiveDate;

use super::TailCapacityLedger;
use crate::models::EXTRA_TAIL;

/// Chooses tails for pilot pairs within one generation run.
///
/// Owns the run's capacity ledger and round-robin cursor.
#[derive(Debug, Clone)]
pub struct PairAssignmentPolicy {
    tails: Vec<String>,
    ledger: TailCapacityLedger,
    cursor: usize,
}

impl PairAssignmentPolicy {
    /// Creates a policy over the configured tail numbers with the default cap.
    pub fn new(tails: Vec<String>) -> Self {
        Self {
            tails,
            ledger: TailCapacityLedger::new(),
            cursor: 0,
        }
    }

    /// Creates a policy with a custom pairs-per-tail-per-day cap.
    pub fn with_pairs_per_day(tails: Vec<String>, pairs_per_day: u32) -> Self {
        Self {
            tails,
            ledger: TailCapacityLedger::with_pairs_per_day(pairs_per_day),
            cursor: 0,
        }
    }

    /// Read access to the run's capacity ledger.
    pub fn ledger(&self) -> &TailCapacityLedger {
        &self.ledger
    }

    /// Chooses a tail for a pair, reserving capacity on the chosen tail.
    ///
    /// Returns `EXTRA_TAIL` when every configured tail is at capacity (or
    /// none are configured). EXTRA reservations are not tracked.
    pub fn choose_tail(
        &mut self,
        date: NaiveDate,
        pref_a: Option<&str>,
        pref_b: Option<&str>,
    ) -> String {
        let pref_a = pref_a.map(str::trim).filter(|p| !p.is_empty());
        let pref_b = pref_b.map(str::trim).filter(|p| !p.is_empty());

        if let (Some(a), Some(b)) = (pref_a, pref_b) {
            if a == b && self.can_use(date, a) {
                self.ledger.reserve_pair(date, a);
                return a.to_string();
            }
        }
        if let Some(a) = pref_a {
            if self.can_use(date, a) {
                self.ledger.reserve_pair(date, a);
                return a.to_string();
            }
        }
        if let Some(b) = pref_b {
            if self.can_use(date, b) {
                self.ledger.reserve_pair(date, b);
                return b.to_string();
            }
        }

        let attempts = self.tails.len();
        for i in 0..attempts {
            let index = (self.cursor + i) % attempts;
            if self.can_use(date, &self.tails[index]) {
                let chosen = self.tails[index].clone();
                self.cursor = (self.cursor + i + 1) % attempts;
                self.ledger.reserve_pair(date, &chosen);
                return chosen;
            }
        }

        tracing::trace!(%date, "no tail capacity left, overflowing to EXTRA");
        EXTRA_TAIL.to_string()
    }

    /// A tail is usable iff it is configured and has remaining capacity.
    fn can_use(&self, date: NaiveDate, tail_number: &str) -> bool {
        self.tails.iter().any(|t| t == tail_number) && self.ledger.has_capacity(date, tail_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
    }

    fn fleet() -> Vec<String> {
        vec!["118DL".into(), "808ME".into(), "901CX".into()]
    }

    #[test]
    fn test_shared_preference_wins() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        let tail = policy.choose_tail(d(1), Some("808ME"), Some("808ME"));
        assert_eq!(tail, "808ME");
        assert_eq!(policy.ledger().pairs_used(d(1), "808ME"), 1);
    }

    #[test]
    fn test_first_pilot_preference_beats_second() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        let tail = policy.choose_tail(d(1), Some("901CX"), Some("808ME"));
        assert_eq!(tail, "901CX");
    }

    #[test]
    fn test_second_pilot_preference_when_first_unavailable() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        policy.choose_tail(d(1), Some("901CX"), None);
        // 901CX is now at capacity; the second pair falls to pilot B's pick.
        let tail = policy.choose_tail(d(1), Some("901CX"), Some("808ME"));
        assert_eq!(tail, "808ME");
    }

    #[test]
    fn test_round_robin_advances_across_calls() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        assert_eq!(policy.choose_tail(d(1), None, None), "118DL");
        assert_eq!(policy.choose_tail(d(1), None, None), "808ME");
        assert_eq!(policy.choose_tail(d(1), None, None), "901CX");
        // Cursor wraps; day 2 starts wherever day 1 left off.
        assert_eq!(policy.choose_tail(d(2), None, None), "118DL");
    }

    #[test]
    fn test_round_robin_skips_full_tails() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        policy.choose_tail(d(1), Some("118DL"), None);
        // 118DL full; the scan starts at the cursor (still 0) and skips it.
        assert_eq!(policy.choose_tail(d(1), None, None), "808ME");
    }

    #[test]
    fn test_preference_hit_does_not_advance_cursor() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        policy.choose_tail(d(1), Some("901CX"), None);
        // Round-robin still begins at the first tail.
        assert_eq!(policy.choose_tail(d(1), None, None), "118DL");
    }

    #[test]
    fn test_exhausted_fleet_overflows_to_extra() {
        let mut policy = PairAssignmentPolicy::new(vec!["118DL".into()]);
        assert_eq!(policy.choose_tail(d(1), None, None), "118DL");
        assert_eq!(policy.choose_tail(d(1), None, None), EXTRA_TAIL);
        // EXTRA is never tracked in the ledger.
        assert_eq!(policy.ledger().pairs_used(d(1), EXTRA_TAIL), 0);
    }

    #[test]
    fn test_unknown_preference_falls_through() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        let tail = policy.choose_tail(d(1), Some("N999ZZ"), None);
        assert_eq!(tail, "118DL");
    }

    #[test]
    fn test_blank_preference_ignored() {
        let mut policy = PairAssignmentPolicy::new(fleet());
        let tail = policy.choose_tail(d(1), Some("  "), Some(""));
        assert_eq!(tail, "118DL");
    }

    #[test]
    fn test_no_tails_configured() {
        let mut policy = PairAssignmentPolicy::new(Vec::new());
        assert_eq!(policy.choose_tail(d(1), Some("118DL"), None), EXTRA_TAIL);
    }

    #[test]
    fn test_capacity_resets_per_day_not_per_run() {
        let mut policy = PairAssignmentPolicy::new(vec!["118DL".into()]);
        assert_eq!(policy.choose_tail(d(1), None, None), "118DL");
        // Next day the tail is free again even though the run continues.
        assert_eq!(policy.choose_tail(d(2), None, None), "118DL");
    }

    #[test]
    fn test_custom_pairs_per_day() {
        let mut policy = PairAssignmentPolicy::with_pairs_per_day(vec!["118DL".into()], 2);
        assert_eq!(policy.choose_tail(d(1), None, None), "118DL");
        assert_eq!(policy.choose_tail(d(1), None, None), "118DL");
        assert_eq!(policy.choose_tail(d(1), None, None), EXTRA_TAIL);
    }
}
