//! Read-only projections over a generated plan.
//!
//! Two views derive from the same flat assignment list without mutating it:
//!
//! - **Calendar events**: one all-day event per ON assignment, colored by
//!   tail, with independently-booked trips merged alongside as separate
//!   events. Consumed by a calendar widget.
//! - **Tail-by-day grid**: one row per configured tail, one column per day,
//!   cells listing the ON pilots crewing that tail that day. Consumed by a
//!   grid widget.
//!
//! Both are pure functions of their inputs; regenerating the plan and
//! re-projecting always yields the same views.

mod calendar;
mod grid;

pub use calendar::{
    assignment_events, merged_events, trip_events, CalendarEvent, Trip, TripLegs,
    EXTRA_EVENT_COLOR, OFF_EVENT_COLOR, TRIP_EVENT_COLOR,
};
pub use grid::{DayColumn, TailGrid, TailRow};
