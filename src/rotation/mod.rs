//! The rotation scheduling engine.
//!
//! `RotationGenerator` walks the requested window day by day: duty cycles
//! resolve which pilots are ON, ON pilots are paired in roster order, and
//! `PairAssignmentPolicy` places each pair on a tail under the capacity cap
//! tracked by `TailCapacityLedger`. Pilots left without a tail land in the
//! EXTRA overflow bucket. `RotationKpi` summarizes a finished plan.
//!
//! All mutable generation state (capacity ledger, round-robin cursor) is
//! owned by one generation run. Nothing is process-wide, so concurrent
//! independent runs cannot interfere.

mod generator;
mod kpi;
mod ledger;
mod policy;

pub use generator::{RotationGenerator, RotationRequest};
pub use kpi::RotationKpi;
pub use ledger::{TailCapacityLedger, MAX_PAIRS_PER_TAIL_PER_DAY};
pub use policy::PairAssignmentPolicy;
