//! Tail (aircraft) model.
//!
//! A tail is a capacity-constrained resource identified by its registration
//! number. The color is a display attribute carried through to projections;
//! it has no scheduling effect.

use serde::{Deserialize, Serialize};

/// An aircraft, identified by its registration (tail number).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tail {
    /// Unique tail number (e.g. "118DL").
    pub tail_number: String,
    /// Display color for calendar and grid views (e.g. "#22c55e").
    pub color_hex: String,
}

impl Tail {
    /// Creates a tail with the given registration and display color.
    pub fn new(tail_number: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self {
            tail_number: tail_number.into(),
            color_hex: color_hex.into(),
        }
    }
}
