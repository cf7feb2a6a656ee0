// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Service type string is not one of the known service types.
    UnknownServiceType(String),
    /// Frequency string is not one of the known frequencies.
    UnknownFrequency(String),
    /// Pace string is not one of the known paces.
    UnknownPace(String),
    /// Extra identifier is not one of the known extras.
    UnknownExtra(String),
    /// Time slot string is not one of the known slots.
    UnknownTimeSlot(String),
    /// Booking status string is not one of the known statuses.
    UnknownStatus(String),
    /// A required contact field is missing or empty.
    MissingContactField(&'static str),
    /// Email address failed validation.
    InvalidEmail(String),
    /// Phone number failed validation.
    InvalidPhone(String),
    /// Postal code failed validation.
    InvalidPostalCode(String),
    /// Manual hours override is outside the bookable range.
    HoursOutOfRange {
        /// The rejected value.
        hours: f64,
        /// Lower bound of the bookable range.
        min: f64,
        /// Upper bound of the bookable range.
        max: f64,
    },
    /// Booking status transition is not permitted by the lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownServiceType(s) => write!(f, "Unknown service type: {s}"),
            Self::UnknownFrequency(s) => write!(f, "Unknown frequency: {s}"),
            Self::UnknownPace(s) => write!(f, "Unknown pace: {s}"),
            Self::UnknownExtra(s) => write!(f, "Unknown extra: {s}"),
            Self::UnknownTimeSlot(s) => write!(f, "Unknown time slot: {s}"),
            Self::UnknownStatus(s) => write!(f, "Unknown booking status: {s}"),
            Self::MissingContactField(field) => {
                write!(f, "Required contact field '{field}' is missing")
            }
            Self::InvalidEmail(msg) => write!(f, "Invalid email address: {msg}"),
            Self::InvalidPhone(msg) => write!(f, "Invalid phone number: {msg}"),
            Self::InvalidPostalCode(msg) => write!(f, "Invalid postal code: {msg}"),
            Self::HoursOutOfRange { hours, min, max } => {
                write!(
                    f,
                    "Requested duration {hours} hours is outside the bookable range [{min}, {max}]"
                )
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Booking status cannot transition from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
