//! Pilot/tail rotation scheduling for charter fleet operations.
//!
//! Produces a day-by-day assignment of pilot pairs to aircraft ("tails")
//! over a rolling window: each pilot's repeating on/off duty cycle resolves
//! who is ON, ON pilots are paired in roster order, and each pair is placed
//! on a tail under a one-pair-per-tail-per-day capacity cap. Preferred
//! tails are tried first, then a round-robin scan, then the EXTRA overflow
//! bucket. The flat assignment list feeds two read-only projections: a
//! calendar-event list and a tail-by-day grid.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Pilot`, `DutyCycle`, `Tail`,
//!   `Assignment`, `RotationPlan`
//! - **`rotation`**: The engine — `RotationGenerator`, `PairAssignmentPolicy`,
//!   `TailCapacityLedger`, `RotationKpi`
//! - **`projection`**: Calendar-event and tail-grid views over a generated plan
//! - **`validation`**: Boundary sanitation (trimming, window clamping) and
//!   roster integrity checks
//!
//! # Determinism
//!
//! Generation is a pure function of its request: no clock, randomness, or
//! process-wide state is involved. The round-robin cursor and the capacity
//! ledger live inside a single generation run, so independent runs (even
//! concurrent ones on separate threads) never interfere, and regenerating
//! with identical inputs reproduces the plan exactly.

pub mod models;
pub mod projection;
pub mod rotation;
pub mod validation;
