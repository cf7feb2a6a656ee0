// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use suds_booking::CoreError;
use suds_domain::DomainError;
use suds_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core/persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The draft does not satisfy a step's completion predicate.
    IncompleteDraft {
        /// The label of the incomplete step.
        step: String,
        /// A human-readable description of what is missing.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A submission is already in flight for this flow.
    SubmissionInFlight,
    /// The storage collaborator failed; the draft is preserved for retry.
    Storage {
        /// A description of the storage failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::IncompleteDraft { step, message } => {
                write!(f, "Step '{step}' is incomplete: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::SubmissionInFlight => {
                write!(f, "A submission is already in flight for this booking")
            }
            Self::Storage { message } => write!(f, "Storage error: {message}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownServiceType(msg) => ApiError::InvalidInput {
            field: String::from("service_type"),
            message: format!("Unknown service type: {msg}"),
        },
        DomainError::UnknownFrequency(msg) => ApiError::InvalidInput {
            field: String::from("frequency"),
            message: format!("Unknown frequency: {msg}"),
        },
        DomainError::UnknownPace(msg) => ApiError::InvalidInput {
            field: String::from("pace"),
            message: format!("Unknown pace: {msg}"),
        },
        DomainError::UnknownExtra(msg) => ApiError::InvalidInput {
            field: String::from("extras"),
            message: format!("Unknown extra: {msg}"),
        },
        DomainError::UnknownTimeSlot(msg) => ApiError::InvalidInput {
            field: String::from("preferred_time"),
            message: format!("Unknown time slot: {msg}"),
        },
        DomainError::UnknownStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown booking status: {msg}"),
        },
        DomainError::MissingContactField(field) => ApiError::InvalidInput {
            field: String::from(field),
            message: format!("Required contact field '{field}' is missing"),
        },
        DomainError::InvalidEmail(msg) => ApiError::InvalidInput {
            field: String::from("email"),
            message: msg,
        },
        DomainError::InvalidPhone(msg) => ApiError::InvalidInput {
            field: String::from("phone"),
            message: msg,
        },
        DomainError::InvalidPostalCode(msg) => ApiError::InvalidInput {
            field: String::from("postal_code"),
            message: msg,
        },
        DomainError::HoursOutOfRange { hours, min, max } => ApiError::InvalidInput {
            field: String::from("hours"),
            message: format!("{hours} is outside the bookable range [{min}, {max}]"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("booking_lifecycle"),
            message: format!("Booking status cannot transition from {from} to {to}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SubmissionInFlight => ApiError::SubmissionInFlight,
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::BookingNotFound(id) => Self::ResourceNotFound {
                resource_type: String::from("Booking"),
                message: format!("Booking {id} does not exist"),
            },
            PersistenceError::IllegalStatusTransition {
                booking_id,
                from,
                to,
            } => Self::DomainRuleViolation {
                rule: String::from("booking_lifecycle"),
                message: format!("Booking {booking_id} cannot transition from {from} to {to}"),
            },
            PersistenceError::DatabaseError(_)
            | PersistenceError::DatabaseConnectionFailed(_)
            | PersistenceError::InitializationError(_)
            | PersistenceError::SerializationError(_)
            | PersistenceError::CorruptRecord { .. } => Self::Storage {
                message: err.to_string(),
            },
        }
    }
}
