// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{CreateBookingRequest, QuoteRequest};
use crate::submit::BookingStore;
use suds_persistence::{BookingRecord, NewBookingRecord, PersistenceError};

/// A store whose inserts always fail, for exercising the retry path.
pub struct FailingStore;

impl BookingStore for FailingStore {
    fn insert_booking(
        &mut self,
        _record: &NewBookingRecord,
    ) -> Result<BookingRecord, PersistenceError> {
        Err(PersistenceError::DatabaseError(String::from(
            "disk I/O error",
        )))
    }
}

/// A store that records how many inserts it saw, then fails them all.
pub struct CountingFailingStore {
    pub attempts: u32,
}

impl BookingStore for CountingFailingStore {
    fn insert_booking(
        &mut self,
        _record: &NewBookingRecord,
    ) -> Result<BookingRecord, PersistenceError> {
        self.attempts += 1;
        Err(PersistenceError::DatabaseError(String::from(
            "disk I/O error",
        )))
    }
}

/// A quote request for a mid-size weekly home cleaning with one extra.
pub fn weekly_home_quote() -> QuoteRequest {
    QuoteRequest {
        service_type: String::from("home"),
        size_sqm: 75,
        bedrooms: 2,
        bathrooms: 1,
        pace: None,
        frequency: Some(String::from("weekly")),
        extras: vec![String::from("oven")],
        hours: None,
    }
}

/// A fully valid booking submission.
pub fn valid_booking_request() -> CreateBookingRequest {
    CreateBookingRequest {
        service_type: String::from("home"),
        size_sqm: 75,
        bedrooms: 2,
        bathrooms: 1,
        pace: None,
        frequency: String::from("weekly"),
        date: String::from("2026-03-14"),
        preferred_time: String::from("morning"),
        extras: vec![String::from("oven"), String::from("fridge")],
        hours: None,
        first_name: String::from("Maja"),
        last_name: String::from("Lindqvist"),
        email: String::from("maja@example.com"),
        phone: String::from("+46 70 123 45 67"),
        address: String::from("Storgatan 12"),
        postal_code: String::from("114 55"),
        special_instructions: Some(String::from("Spare key under the mat")),
    }
}
