// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::PersistenceError;
use suds_domain::{BookingStatus, Extra, Frequency, ServiceType, TimeSlot};

/// A fully validated booking ready for insertion.
///
/// Built by the submission adapter from a draft whose step predicates all
/// hold; the fields mirror the snake_case persistence columns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingRecord {
    /// The kind of cleaning service.
    pub service_type: ServiceType,
    /// Booked visit duration in hours.
    pub hours: f64,
    /// Bedroom count (zero for offices).
    pub bedrooms: u32,
    /// Bathroom count.
    pub bathrooms: u32,
    /// Booking frequency.
    pub frequency: Frequency,
    /// Scheduled visit date, ISO 8601 (`YYYY-MM-DD`).
    pub date: String,
    /// Preferred arrival window.
    pub preferred_time: TimeSlot,
    /// Selected extras.
    pub extras: BTreeSet<Extra>,
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
}

/// A persisted booking as read back from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    /// The generated identifier.
    pub booking_id: i64,
    /// The kind of cleaning service.
    pub service_type: ServiceType,
    /// Booked visit duration in hours.
    pub hours: f64,
    /// Bedroom count (zero for offices).
    pub bedrooms: u32,
    /// Bathroom count.
    pub bathrooms: u32,
    /// Booking frequency.
    pub frequency: Frequency,
    /// Scheduled visit date, ISO 8601 (`YYYY-MM-DD`).
    pub date: String,
    /// Preferred arrival window.
    pub preferred_time: TimeSlot,
    /// Selected extras.
    pub extras: BTreeSet<Extra>,
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
    pub status: BookingStatus,
    /// Insertion timestamp as recorded by the database.
    pub created_at: String,
}

/// Raw column values read from a `bookings` row, before domain mapping.
#[derive(Debug, Clone)]
pub(crate) struct BookingRow {
    pub booking_id: i64,
    pub service_type: String,
    pub hours: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub frequency: String,
    pub date: String,
    pub preferred_time: String,
    pub extras_json: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub postal_code: String,
    pub special_instructions: Option<String>,
    pub total_price: f64,
    pub status: String,
    pub created_at: String,
}

impl TryFrom<BookingRow> for BookingRecord {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        let booking_id: i64 = row.booking_id;
        let corrupt = |reason: String| PersistenceError::CorruptRecord { booking_id, reason };

        let service_type: ServiceType = ServiceType::from_str(&row.service_type)
            .map_err(|err| corrupt(err.to_string()))?;
        let frequency: Frequency =
            Frequency::from_str(&row.frequency).map_err(|err| corrupt(err.to_string()))?;
        let preferred_time: TimeSlot =
            TimeSlot::from_str(&row.preferred_time).map_err(|err| corrupt(err.to_string()))?;
        let status: BookingStatus =
            BookingStatus::from_str(&row.status).map_err(|err| corrupt(err.to_string()))?;
        let extras: BTreeSet<Extra> = serde_json::from_str(&row.extras_json)?;

        Ok(Self {
            booking_id,
            service_type,
            hours: row.hours,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            frequency,
            date: row.date,
            preferred_time,
            extras,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            address: row.address,
            postal_code: row.postal_code,
            special_instructions: row.special_instructions,
            total_price: row.total_price,
            status,
            created_at: row.created_at,
        })
    }
}
