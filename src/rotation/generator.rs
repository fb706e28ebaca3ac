//! Rotation schedule generator.
//!
//! # Algorithm
//!
//! For each day of the window:
//! 1. Resolve each pilot's duty status from their cycle.
//! 2. Pair consecutive ON pilots in roster order; an odd pilot is left over.
//! 3. Each pair gets one tail (or EXTRA) from `PairAssignmentPolicy`; both
//!    members receive it. Leftover pilots go straight to EXTRA.
//! 4. Every pilot emits exactly one assignment, OFF days included.
//!
//! # Complexity
//! O(pilots * days), plus O(tails) per pair for the round-robin scan.
//!
//! The generator performs no input validation; callers sanitize and clamp
//! the request first (see the `validation` module). Re-generating replaces
//! prior output wholesale; there is no incremental or merge path.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use super::ledger::MAX_PAIRS_PER_TAIL_PER_DAY;
use super::PairAssignmentPolicy;
use crate::models::{Assignment, DutyStatus, Pilot, RotationPlan, Tail, EXTRA_TAIL};

/// Input container for one generation run.
///
/// Owned by the caller; the generator reads it and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationRequest {
    /// First day of the window (day 0 of every pilot's cycle).
    pub start_date: NaiveDate,
    /// Window length in days. Callers clamp to the supported range first.
    pub days: u32,
    /// Roster, in pairing order.
    pub pilots: Vec<Pilot>,
    /// Fleet of assignable tails.
    pub tails: Vec<Tail>,
}

impl RotationRequest {
    /// Creates a request with an empty roster and fleet.
    pub fn new(start_date: NaiveDate, days: u32) -> Self {
        Self {
            start_date,
            days,
            pilots: Vec::new(),
            tails: Vec::new(),
        }
    }

    /// Replaces the roster.
    pub fn with_pilots(mut self, pilots: Vec<Pilot>) -> Self {
        self.pilots = pilots;
        self
    }

    /// Appends a pilot to the roster.
    pub fn with_pilot(mut self, pilot: Pilot) -> Self {
        self.pilots.push(pilot);
        self
    }

    /// Replaces the fleet.
    pub fn with_tails(mut self, tails: Vec<Tail>) -> Self {
        self.tails = tails;
        self
    }

    /// Appends a tail to the fleet.
    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tails.push(tail);
        self
    }
}

/// Deterministic pilot-pair-to-tail rotation generator.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crew_rotation::models::{Pilot, Tail};
/// use crew_rotation::rotation::{RotationGenerator, RotationRequest};
///
/// let request = RotationRequest::new(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), 7)
///     .with_pilot(Pilot::new("Rod").with_cycle(15, 10).with_preferred_tail("118DL"))
///     .with_pilot(Pilot::new("John").with_cycle(15, 10))
///     .with_tail(Tail::new("118DL", "#22c55e"));
///
/// let plan = RotationGenerator::new().generate(&request);
/// assert_eq!(plan.len(), 2 * 7);
/// assert!(plan.iter().all(|a| a.tail_number == "118DL"));
/// ```
#[derive(Debug, Clone)]
pub struct RotationGenerator {
    pairs_per_tail_per_day: u32,
}

impl RotationGenerator {
    /// Creates a generator with the default one-pair-per-tail-per-day cap.
    pub fn new() -> Self {
        Self {
            pairs_per_tail_per_day: MAX_PAIRS_PER_TAIL_PER_DAY,
        }
    }

    /// Overrides the pairs-per-tail-per-day cap.
    pub fn with_pairs_per_tail_per_day(mut self, pairs_per_day: u32) -> Self {
        self.pairs_per_tail_per_day = pairs_per_day;
        self
    }

    /// Generates the full plan for the requested window.
    ///
    /// Emits exactly one assignment per pilot per day, row-major by day then
    /// roster order. Zero configured tails routes every ON pair to EXTRA;
    /// zero pilots yields an empty plan.
    pub fn generate(&self, request: &RotationRequest) -> RotationPlan {
        let tail_numbers: Vec<String> = request
            .tails
            .iter()
            .map(|t| t.tail_number.clone())
            .filter(|t| !t.is_empty())
            .collect();

        let mut policy =
            PairAssignmentPolicy::with_pairs_per_day(tail_numbers, self.pairs_per_tail_per_day);
        let mut plan = RotationPlan::new();

        tracing::debug!(
            days = request.days,
            pilots = request.pilots.len(),
            tails = request.tails.len(),
            "generating rotation plan"
        );

        for day_index in 0..request.days {
            let date = request.start_date + Duration::days(i64::from(day_index));

            let on_pilots: Vec<&Pilot> = request
                .pilots
                .iter()
                .filter(|p| p.status_on_day(day_index).is_on())
                .collect();

            let mut tail_for_pilot: HashMap<&str, String> = HashMap::new();
            for pair in on_pilots.chunks(2) {
                match pair {
                    [a, b] => {
                        let tail = policy.choose_tail(date, a.preference(), b.preference());
                        tail_for_pilot.insert(a.name.as_str(), tail.clone());
                        tail_for_pilot.insert(b.name.as_str(), tail);
                    }
                    [leftover] => {
                        // Odd pilot out: straight to EXTRA, no capacity check.
                        tail_for_pilot.insert(leftover.name.as_str(), EXTRA_TAIL.to_string());
                    }
                    _ => {}
                }
            }

            for pilot in &request.pilots {
                let assignment = match pilot.status_on_day(day_index) {
                    DutyStatus::On => {
                        let tail = tail_for_pilot
                            .get(pilot.name.as_str())
                            .cloned()
                            .unwrap_or_else(|| EXTRA_TAIL.to_string());
                        Assignment::on(date, &pilot.name, tail)
                    }
                    DutyStatus::Off => Assignment::off(date, &pilot.name),
                };
                plan.push(assignment);
            }
        }

        plan
    }
}

impl Default for RotationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn always_on(name: &str) -> Pilot {
        Pilot::new(name).with_cycle(7, 0)
    }

    fn sample_request() -> RotationRequest {
        RotationRequest::new(start(), 14)
            .with_pilot(Pilot::new("Rod").with_cycle(15, 10).with_preferred_tail("118DL"))
            .with_pilot(Pilot::new("John").with_cycle(15, 10).with_preferred_tail("808ME"))
            .with_pilot(Pilot::new("Dan").with_cycle(10, 10))
            .with_pilot(Pilot::new("Kyle").with_cycle(10, 10))
            .with_tail(Tail::new("118DL", "#22c55e"))
            .with_tail(Tail::new("808ME", "#f97316"))
    }

    #[test]
    fn test_determinism() {
        let request = sample_request();
        let generator = RotationGenerator::new();
        assert_eq!(generator.generate(&request), generator.generate(&request));
    }

    #[test]
    fn test_one_assignment_per_pilot_per_day() {
        let request = sample_request();
        let plan = RotationGenerator::new().generate(&request);
        assert_eq!(plan.len(), request.pilots.len() * request.days as usize);
    }

    #[test]
    fn test_off_iff_empty_tail() {
        let plan = RotationGenerator::new().generate(&sample_request());
        for a in plan.iter() {
            assert_eq!(a.status == DutyStatus::Off, a.tail_number.is_empty());
        }
    }

    #[test]
    fn test_capacity_at_most_one_pair_per_tail_per_day() {
        let request = RotationRequest::new(start(), 7)
            .with_pilots(vec![
                always_on("A"),
                always_on("B"),
                always_on("C"),
                always_on("D"),
                always_on("E"),
                always_on("F"),
            ])
            .with_tail(Tail::new("118DL", "#22c55e"))
            .with_tail(Tail::new("808ME", "#f97316"));

        let plan = RotationGenerator::new().generate(&request);
        for day_index in 0..7u32 {
            let date = start() + Duration::days(i64::from(day_index));
            for tail in ["118DL", "808ME"] {
                assert!(plan.pilots_on_tail(date, tail).len() <= 2);
            }
        }
    }

    #[test]
    fn test_row_major_output_order() {
        let request = sample_request();
        let plan = RotationGenerator::new().generate(&request);
        let names: Vec<&str> = request.pilots.iter().map(|p| p.name.as_str()).collect();

        for (i, a) in plan.iter().enumerate() {
            let day = i / names.len();
            assert_eq!(a.date, start() + Duration::days(day as i64));
            assert_eq!(a.pilot_name, names[i % names.len()]);
        }
    }

    #[test]
    fn test_shared_preference_honored() {
        let request = RotationRequest::new(start(), 7)
            .with_pilot(always_on("A").with_preferred_tail("N1"))
            .with_pilot(always_on("B").with_preferred_tail("N1"))
            .with_tail(Tail::new("N1", "#22c55e"))
            .with_tail(Tail::new("N2", "#f97316"));

        let plan = RotationGenerator::new().generate(&request);
        assert!(plan.iter().all(|a| a.tail_number == "N1"));
    }

    #[test]
    fn test_overflow_second_pair_gets_extra() {
        let request = RotationRequest::new(start(), 1)
            .with_pilots(vec![
                always_on("A"),
                always_on("B"),
                always_on("C"),
                always_on("D"),
            ])
            .with_tail(Tail::new("T1", "#22c55e"));

        let plan = RotationGenerator::new().generate(&request);
        assert_eq!(plan.assignments[0].tail_number, "T1");
        assert_eq!(plan.assignments[1].tail_number, "T1");
        assert_eq!(plan.assignments[2].tail_number, EXTRA_TAIL);
        assert_eq!(plan.assignments[3].tail_number, EXTRA_TAIL);
    }

    #[test]
    fn test_odd_pilot_out_gets_extra() {
        let request = RotationRequest::new(start(), 1)
            .with_pilots(vec![always_on("A"), always_on("B"), always_on("C")])
            .with_tail(Tail::new("T1", "#22c55e"));

        let plan = RotationGenerator::new().generate(&request);
        assert_eq!(plan.assignments[0].tail_number, "T1");
        assert_eq!(plan.assignments[1].tail_number, "T1");
        // The unpaired pilot lands in EXTRA even though no capacity ran out.
        assert_eq!(plan.assignments[2].tail_number, EXTRA_TAIL);
    }

    #[test]
    fn test_zero_tails_routes_everyone_to_extra() {
        let request = RotationRequest::new(start(), 7)
            .with_pilots(vec![always_on("A"), always_on("B")]);

        let plan = RotationGenerator::new().generate(&request);
        assert!(plan.iter().all(|a| a.tail_number == EXTRA_TAIL));
    }

    #[test]
    fn test_zero_pilots_yields_empty_plan() {
        let request = RotationRequest::new(start(), 30).with_tail(Tail::new("T1", "#22c55e"));
        let plan = RotationGenerator::new().generate(&request);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_blank_tail_numbers_never_assigned() {
        let request = RotationRequest::new(start(), 7)
            .with_pilots(vec![always_on("A"), always_on("B")])
            .with_tail(Tail::new("", "#22c55e"))
            .with_tail(Tail::new("T1", "#f97316"));

        let plan = RotationGenerator::new().generate(&request);
        assert!(plan.iter().all(|a| a.tail_number == "T1"));
    }

    #[test]
    fn test_round_robin_rotates_unpreferred_pairs() {
        // Two pairs, no preferences: day 0 gives T1 then T2; the cursor
        // carries into day 1, so the first pair starts back at T1.
        let request = RotationRequest::new(start(), 2)
            .with_pilots(vec![
                always_on("A"),
                always_on("B"),
                always_on("C"),
                always_on("D"),
            ])
            .with_tail(Tail::new("T1", "#22c55e"))
            .with_tail(Tail::new("T2", "#f97316"));

        let plan = RotationGenerator::new().generate(&request);
        let day0 = start();
        let day1 = start() + Duration::days(1);
        assert_eq!(plan.pilots_on_tail(day0, "T1"), vec!["A", "B"]);
        assert_eq!(plan.pilots_on_tail(day0, "T2"), vec!["C", "D"]);
        assert_eq!(plan.pilots_on_tail(day1, "T1"), vec!["A", "B"]);
        assert_eq!(plan.pilots_on_tail(day1, "T2"), vec!["C", "D"]);
    }

    #[test]
    fn test_off_pilot_excluded_from_pairing() {
        // B is OFF on day 0, so A pairs with C and B emits an OFF record.
        let request = RotationRequest::new(start(), 1)
            .with_pilot(always_on("A"))
            .with_pilot(Pilot::new("B").with_cycle(0, 5))
            .with_pilot(always_on("C"))
            .with_tail(Tail::new("T1", "#22c55e"));

        let plan = RotationGenerator::new().generate(&request);
        assert_eq!(plan.assignments[0].tail_number, "T1"); // A
        assert_eq!(plan.assignments[1].status, DutyStatus::Off); // B
        assert_eq!(plan.assignments[2].tail_number, "T1"); // C
    }

    #[test]
    fn test_custom_capacity_allows_second_pair() {
        let request = RotationRequest::new(start(), 1)
            .with_pilots(vec![
                always_on("A"),
                always_on("B"),
                always_on("C"),
                always_on("D"),
            ])
            .with_tail(Tail::new("T1", "#22c55e"));

        let generator = RotationGenerator::new().with_pairs_per_tail_per_day(2);
        let plan = generator.generate(&request);
        assert!(plan.iter().all(|a| a.tail_number == "T1"));
    }
}
