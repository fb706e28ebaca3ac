//! Rotation scheduling domain models.
//!
//! Provides the core data types for roster configuration and generated
//! schedules: pilots with repeating duty cycles, aircraft tails, and the
//! per-pilot-per-day assignment records a generation run emits.
//!
//! # Domain Mappings
//!
//! | crew-rotation | Charter ops |
//! |---------------|-------------|
//! | Pilot | Crew member on the rotation roster |
//! | DutyCycle | Repeating on-days/off-days pattern |
//! | Tail | Aircraft, identified by registration |
//! | Assignment | One pilot's status (and tail) for one day |
//! | RotationPlan | The full generated schedule for a window |

mod assignment;
mod duty;
mod pilot;
mod tail;

pub use assignment::{Assignment, RotationPlan, EXTRA_TAIL};
pub use duty::{DutyCycle, DutyStatus};
pub use pilot::Pilot;
pub use tail::Tail;
