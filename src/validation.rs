//! Boundary sanitation and roster validation.
//!
//! The generator assumes pre-validated input: non-blank trimmed names,
//! a window clamped to the supported range. `sanitize_request` performs
//! exactly that cleanup, mirroring what the roster-editing boundary does
//! before invoking generation. `validate_request` is the stricter check:
//! it collects every structural problem (duplicates, blanks, out-of-range
//! window, dangling preferences) instead of stopping at the first.

use thiserror::Error;

use crate::rotation::RotationRequest;

/// Smallest supported window, in days.
pub const MIN_DAYS: u32 = 7;
/// Largest supported window, in days.
pub const MAX_DAYS: u32 = 365;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A pilot name is empty or whitespace.
    BlankPilotName,
    /// A tail number is empty or whitespace.
    BlankTailNumber,
    /// Two pilots share the same name.
    DuplicatePilotName,
    /// Two tails share the same tail number.
    DuplicateTailNumber,
    /// The window length is outside the supported range.
    DaysOutOfRange,
    /// A preferred tail references no configured tail.
    UnknownPreferredTail,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Clamps a window length to the supported range.
pub fn clamp_days(days: u32) -> u32 {
    days.clamp(MIN_DAYS, MAX_DAYS)
}

/// Cleans a request the way the roster-editing boundary does.
///
/// Trims pilot names and tail numbers, drops entries left blank, normalizes
/// blank preferences to `None`, and clamps the window to the supported
/// range. The result satisfies the generator's input assumptions.
pub fn sanitize_request(mut request: RotationRequest) -> RotationRequest {
    for pilot in &mut request.pilots {
        pilot.name = pilot.name.trim().to_string();
        pilot.preferred_tail = pilot
            .preferred_tail
            .take()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
    }
    request.pilots.retain(|p| !p.name.is_empty());

    for tail in &mut request.tails {
        tail.tail_number = tail.tail_number.trim().to_string();
    }
    request.tails.retain(|t| !t.tail_number.is_empty());

    request.days = clamp_days(request.days);
    request
}

/// Validates the structural integrity of a request.
///
/// Checks:
/// 1. No blank pilot names or tail numbers
/// 2. No duplicate pilot names
/// 3. No duplicate tail numbers
/// 4. Window length within [`MIN_DAYS`, `MAX_DAYS`]
/// 5. Every preferred tail references a configured tail
///
/// The generator itself tolerates an unknown preference (it falls through
/// to round-robin); it is reported here for callers that want strict
/// rosters.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &RotationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let mut tail_numbers = Vec::new();
    for tail in &request.tails {
        let number = tail.tail_number.trim();
        if number.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankTailNumber,
                "Tail with blank tail number",
            ));
            continue;
        }
        if tail_numbers.contains(&number) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTailNumber,
                format!("Duplicate tail number: {number}"),
            ));
        } else {
            tail_numbers.push(number);
        }
    }

    let mut pilot_names = Vec::new();
    for pilot in &request.pilots {
        let name = pilot.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankPilotName,
                "Pilot with blank name",
            ));
            continue;
        }
        if pilot_names.contains(&name) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePilotName,
                format!("Duplicate pilot name: {name}"),
            ));
        } else {
            pilot_names.push(name);
        }

        if let Some(pref) = pilot.preference() {
            if !tail_numbers.contains(&pref) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPreferredTail,
                    format!("Pilot '{name}' prefers unknown tail '{pref}'"),
                ));
            }
        }
    }

    if request.days < MIN_DAYS || request.days > MAX_DAYS {
        errors.push(ValidationError::new(
            ValidationErrorKind::DaysOutOfRange,
            format!(
                "Window of {} days outside supported range [{MIN_DAYS}, {MAX_DAYS}]",
                request.days
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
