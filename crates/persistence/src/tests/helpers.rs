// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::records::NewBookingRecord;
use std::collections::BTreeSet;
use suds_domain::{Extra, Frequency, ServiceType, TimeSlot};

/// A valid record for a weekly home cleaning.
pub fn sample_booking() -> NewBookingRecord {
    NewBookingRecord {
        service_type: ServiceType::Home,
        hours: 3.5,
        bedrooms: 2,
        bathrooms: 1,
        frequency: Frequency::Weekly,
        date: String::from("2026-03-14"),
        preferred_time: TimeSlot::Morning,
        extras: BTreeSet::from([Extra::Oven, Extra::Fridge]),
        first_name: String::from("Maja"),
        last_name: String::from("Lindqvist"),
        email: String::from("maja@example.com"),
        phone: String::from("+46 70 123 45 67"),
        address: String::from("Storgatan 12"),
        postal_code: String::from("114 55"),
        special_instructions: Some(String::from("Spare key under the mat")),
        total_price: 135.0,
    }
}
