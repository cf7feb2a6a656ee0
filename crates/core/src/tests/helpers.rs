// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use suds_domain::{ContactInfo, ResidentialDetails, ServiceDetails};
use time::macros::datetime;
use time::{Date, OffsetDateTime};

/// A fixed clock origin for deterministic timer tests.
pub fn t0() -> OffsetDateTime {
    datetime!(2026-03-01 10:00:00 UTC)
}

/// A valid visit date.
pub fn visit_date() -> Date {
    time::macros::date!(2026 - 03 - 14)
}

/// Home details for a mid-size apartment.
pub fn home_details(size_sqm: u32, bedrooms: u32, bathrooms: u32) -> ServiceDetails {
    ServiceDetails::Home(ResidentialDetails {
        size_sqm,
        bedrooms,
        bathrooms,
    })
}

/// A fully valid contact record.
pub fn complete_contact() -> ContactInfo {
    ContactInfo {
        first_name: Some(String::from("Maja")),
        last_name: Some(String::from("Lindqvist")),
        email: Some(String::from("maja@example.com")),
        phone: Some(String::from("+46 70 123 45 67")),
        address: Some(String::from("Storgatan 12")),
        postal_code: Some(String::from("114 55")),
    }
}
