// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin-facing read and lifecycle operations over persisted bookings.

use std::str::FromStr;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{BookingResponse, ListBookingsResponse, UpdateStatusRequest};
use suds_domain::BookingStatus;
use suds_persistence::{BookingRecord, SqliteStore};
use tracing::info;

/// Fetches a single booking by identifier.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no such booking exists, or a
/// storage error.
pub fn get_booking(store: &SqliteStore, booking_id: i64) -> Result<BookingResponse, ApiError> {
    let record: BookingRecord = store.get_booking(booking_id)?;
    Ok(BookingResponse::from(record))
}

/// Lists bookings newest first, optionally filtered by lifecycle status.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an unknown status filter, or a
/// storage error.
pub fn list_bookings(
    store: &SqliteStore,
    status: Option<&str>,
) -> Result<ListBookingsResponse, ApiError> {
    let records: Vec<BookingRecord> = match status {
        Some(raw) => {
            let status: BookingStatus =
                BookingStatus::from_str(raw).map_err(translate_domain_error)?;
            store.list_bookings_by_status(status)?
        }
        None => store.list_bookings()?,
    };
    let bookings: Vec<BookingResponse> =
        records.into_iter().map(BookingResponse::from).collect();
    let count: usize = bookings.len();
    Ok(ListBookingsResponse { bookings, count })
}

/// Moves a booking to a new lifecycle status.
///
/// Only the transitions the booking lifecycle permits are accepted; anything
/// else is rejected without touching the stored row.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an unknown status string,
/// `ApiError::ResourceNotFound` for an unknown booking,
/// `ApiError::DomainRuleViolation` for an illegal transition, or a storage
/// error.
pub fn update_booking_status(
    store: &mut SqliteStore,
    booking_id: i64,
    request: &UpdateStatusRequest,
) -> Result<BookingResponse, ApiError> {
    let status: BookingStatus =
        BookingStatus::from_str(&request.status).map_err(translate_domain_error)?;
    let record: BookingRecord = store.update_status(booking_id, status)?;
    info!(
        booking_id,
        status = record.status.as_str(),
        "Booking status updated"
    );
    Ok(BookingResponse::from(record))
}
