//! Calendar event projection.
//!
//! Maps assignments and trip records to the flat event shape the calendar
//! widget consumes: `{id, title, date, allDay, backgroundColor, borderColor}`
//! (camelCase on the wire). Assignment events precede trip events in the
//! merged list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{DutyStatus, RotationPlan, Tail, EXTRA_TAIL};

/// Fixed neutral color for OFF-day events.
pub const OFF_EVENT_COLOR: &str = "#9ca3af";
/// Fixed neutral color for EXTRA (overflow) events.
pub const EXTRA_EVENT_COLOR: &str = "#64748b";
/// Fixed color for trip events.
pub const TRIP_EVENT_COLOR: &str = "#0ea5e9";

/// An all-day event as consumed by the calendar widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Stable event identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Event date.
    pub date: NaiveDate,
    /// Always true; the schedule has day granularity.
    pub all_day: bool,
    /// Fill color; absent when the tail has no configured color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Border color; mirrors the fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

/// Leg structure of a booked trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripLegs {
    OneLeg,
    MultiLeg,
}

/// An independently-booked trip, merged into the calendar view.
///
/// Trips never interact with scheduling or tail capacity; they are
/// display-only companions to the rotation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Caller-assigned identifier.
    pub id: String,
    /// Booking client.
    pub client_name: String,
    /// Departure airport code.
    pub departure: String,
    /// Destination airport code.
    pub destination: String,
    /// Trip date.
    pub date: NaiveDate,
    /// Passenger count.
    pub passengers: u32,
    /// One leg or multi leg.
    pub legs: TripLegs,
    /// Aircraft type booked for the trip.
    pub plane_type: String,
}

impl Trip {
    /// Creates a single-leg trip with one passenger.
    pub fn new(
        id: impl Into<String>,
        client_name: impl Into<String>,
        departure: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            departure: departure.into(),
            destination: destination.into(),
            date,
            passengers: 1,
            legs: TripLegs::OneLeg,
            plane_type: String::new(),
        }
    }

    /// Sets the passenger count.
    pub fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    /// Sets the leg structure.
    pub fn with_legs(mut self, legs: TripLegs) -> Self {
        self.legs = legs;
        self
    }

    /// Sets the aircraft type.
    pub fn with_plane_type(mut self, plane_type: impl Into<String>) -> Self {
        self.plane_type = plane_type.into();
        self
    }
}

/// Projects assignments to calendar events.
///
/// One event per ON assignment, colored by the tail's configured color
/// (a fixed neutral for EXTRA, absent for an unconfigured tail). The
/// `show_off` flag is part of the caller contract, but OFF assignments are
/// dropped either way under the current filter composition; see the tests.
pub fn assignment_events(
    plan: &RotationPlan,
    tails: &[Tail],
    show_off: bool,
) -> Vec<CalendarEvent> {
    let tail_color: HashMap<&str, &str> = tails
        .iter()
        .map(|t| (t.tail_number.as_str(), t.color_hex.as_str()))
        .collect();

    let mut events = Vec::new();
    for a in plan.iter() {
        if a.status == DutyStatus::Off && !show_off {
            continue;
        }
        if a.status == DutyStatus::Off {
            continue;
        }

        let title = match a.status {
            DutyStatus::Off => format!("{} (OFF)", a.pilot_name),
            DutyStatus::On => format!("{} — {}", a.tail_number, a.pilot_name),
        };

        let color: Option<String> = match a.status {
            DutyStatus::Off => Some(OFF_EVENT_COLOR.to_string()),
            DutyStatus::On if a.tail_number == EXTRA_TAIL => {
                Some(EXTRA_EVENT_COLOR.to_string())
            }
            DutyStatus::On => tail_color
                .get(a.tail_number.as_str())
                .map(|c| (*c).to_string()),
        };

        events.push(CalendarEvent {
            id: format!(
                "asg_{}_{}_{}_{}",
                a.pilot_name, a.date, a.tail_number, a.status
            ),
            title,
            date: a.date,
            all_day: true,
            background_color: color.clone(),
            border_color: color,
        });
    }
    events
}

/// Projects trip records to calendar events.
pub fn trip_events(trips: &[Trip]) -> Vec<CalendarEvent> {
    trips
        .iter()
        .map(|t| CalendarEvent {
            id: format!("trip_{}", t.id),
            title: format!(
                "TRIP: {} • {} → {} • {} • PAX {}",
                t.client_name, t.departure, t.destination, t.plane_type, t.passengers
            ),
            date: t.date,
            all_day: true,
            background_color: Some(TRIP_EVENT_COLOR.to_string()),
            border_color: Some(TRIP_EVENT_COLOR.to_string()),
        })
        .collect()
}

/// Assignment events followed by trip events, as the calendar widget expects.
pub fn merged_events(
    plan: &RotationPlan,
    tails: &[Tail],
    trips: &[Trip],
    show_off: bool,
) -> Vec<CalendarEvent> {
    let mut events = assignment_events(plan, tails, show_off);
    events.extend(trip_events(trips));
    events
}
