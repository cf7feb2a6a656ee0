// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire-level request and response shapes.
//!
//! Everything here is strings and numbers; translation into domain types
//! happens in [`crate::quote`] and [`crate::submit`].

use serde::{Deserialize, Serialize};
use suds_persistence::BookingRecord;

/// A request for a price and duration preview.
///
/// Quotes are previews, not commitments, so unknown or missing enum values
/// fall back to defaults instead of failing the request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteRequest {
    /// The kind of cleaning service.
    pub service_type: String,
    /// Property size in square meters.
    pub size_sqm: u32,
    /// Bedroom count. Ignored for offices.
    #[serde(default)]
    pub bedrooms: u32,
    /// Bathroom count.
    #[serde(default)]
    pub bathrooms: u32,
    /// Cleaning pace. Defaults to standard when absent or unknown.
    #[serde(default)]
    pub pace: Option<String>,
    /// Booking frequency. Defaults to one-time when absent or unknown.
    #[serde(default)]
    pub frequency: Option<String>,
    /// Selected extras. Unknown entries are dropped.
    #[serde(default)]
    pub extras: Vec<String>,
    /// Manual duration override in hours.
    #[serde(default)]
    pub hours: Option<f64>,
}

/// The computed preview for a [`QuoteRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteResponse {
    /// Estimated visit duration in hours.
    pub estimated_hours: f64,
    /// The hourly rate applied for the requested frequency.
    pub hourly_rate: f64,
    /// Total price including extras, rounded to cents.
    pub total_price: f64,
}

/// A full booking submission.
///
/// Unlike quotes, submissions are strict: every enum field must parse and
/// every contact field must validate, or the request is rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateBookingRequest {
    /// The kind of cleaning service.
    pub service_type: String,
    /// Property size in square meters.
    pub size_sqm: u32,
    /// Bedroom count. Ignored for offices.
    #[serde(default)]
    pub bedrooms: u32,
    /// Bathroom count.
    #[serde(default)]
    pub bathrooms: u32,
    /// Cleaning pace. Defaults to standard when absent.
    #[serde(default)]
    pub pace: Option<String>,
    /// Booking frequency.
    pub frequency: String,
    /// Scheduled visit date, ISO 8601 (`YYYY-MM-DD`).
    pub date: String,
    /// Preferred arrival window.
    pub preferred_time: String,
    /// Selected extras.
    #[serde(default)]
    pub extras: Vec<String>,
    /// Manual duration override in hours.
    #[serde(default)]
    pub hours: Option<f64>,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Customer email address.
    pub email: String,
    /// Customer phone number.
    pub phone: String,
    /// Street address of the property.
    pub address: String,
    /// Postal code of the property.
    pub postal_code: String,
    /// Free-form instructions for the cleaner.
    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// A persisted booking rendered for the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingResponse {
    /// The generated identifier.
    pub booking_id: i64,
    /// The kind of cleaning service.
    pub service_type: String,
    /// Booked visit duration in hours.
    pub hours: f64,
    /// Bedroom count (zero for offices).
    pub bedrooms: u32,
    /// Bathroom count.
    pub bathrooms: u32,
    /// Booking frequency.
    pub frequency: String,
    /// Scheduled visit date, ISO 8601 (`YYYY-MM-DD`).
    pub date: String,
    /// Preferred arrival window.
    pub preferred_time: String,
    /// Selected extras.
    pub extras: Vec<String>,
    /// Customer first name.
    pub first_name: String,
    /// Customer last name.
    pub last_name: String,
    /// Customer email address.
    pub email: String,
    /// Customer phone number.
    pub phone: String,
    /// Street address of the property.
    pub address: String,
    /// Postal code of the property.
    pub postal_code: String,
    /// Free-form instructions for the cleaner.
    pub special_instructions: Option<String>,
    /// Total price quoted at submission time.
    pub total_price: f64,
    /// Lifecycle status.
    pub status: String,
    /// Insertion timestamp as recorded by the database.
    pub created_at: String,
}

impl From<BookingRecord> for BookingResponse {
    fn from(record: BookingRecord) -> Self {
        Self {
            booking_id: record.booking_id,
            service_type: String::from(record.service_type.as_str()),
            hours: record.hours,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            frequency: String::from(record.frequency.as_str()),
            date: record.date,
            preferred_time: String::from(record.preferred_time.as_str()),
            extras: record
                .extras
                .iter()
                .map(|extra| String::from(extra.as_str()))
                .collect(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            address: record.address,
            postal_code: record.postal_code,
            special_instructions: record.special_instructions,
            total_price: record.total_price,
            status: String::from(record.status.as_str()),
            created_at: record.created_at,
        }
    }
}

/// A page of bookings for the admin listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBookingsResponse {
    /// The bookings, newest first.
    pub bookings: Vec<BookingResponse>,
    /// How many bookings were returned.
    pub count: usize,
}

/// A request to move a booking to a new lifecycle status.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateStatusRequest {
    /// The target status.
    pub status: String,
}
