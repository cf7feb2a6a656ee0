// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Schema initialization failed.
    InitializationError(String),
    /// Serialization/deserialization of a stored value failed.
    SerializationError(String),
    /// A stored value could not be mapped back onto its domain type.
    CorruptRecord {
        /// The booking the bad value belongs to.
        booking_id: i64,
        /// What was wrong with it.
        reason: String,
    },
    /// The requested booking was not found.
    BookingNotFound(i64),
    /// The requested status change violates the booking lifecycle.
    IllegalStatusTransition {
        /// The booking whose status change was rejected.
        booking_id: i64,
        /// The booking's current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::CorruptRecord { booking_id, reason } => {
                write!(f, "Corrupt record for booking {booking_id}: {reason}")
            }
            Self::BookingNotFound(id) => write!(f, "Booking not found: {id}"),
            Self::IllegalStatusTransition {
                booking_id,
                from,
                to,
            } => {
                write!(
                    f,
                    "Booking {booking_id} cannot transition from {from} to {to}"
                )
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<rusqlite::Error> for PersistenceError {
    fn from(err: rusqlite::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
