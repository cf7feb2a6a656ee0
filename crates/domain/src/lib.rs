// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rule validation for the Suds booking engine.
//!
//! Everything in this crate is pure data and pure functions: closed enums for
//! the service catalog, the booking draft, the static rate table, and the
//! validation rules that gate form-step completion. Nothing here performs IO.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod draft;
mod error;
mod rates;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use draft::{BookingDraft, ContactInfo};
pub use error::DomainError;
pub use rates::{RateTable, Surcharge};
pub use types::{
    BookingStatus, Extra, Frequency, OfficeDetails, Pace, ResidentialDetails, ServiceDetails,
    ServiceType, TimeSlot,
};
pub use validation::{
    validate_contact, validate_email, validate_hours_override, validate_phone,
    validate_postal_code,
};

/// Minimum bookable visit duration in hours.
pub const MIN_VISIT_HOURS: f64 = 2.0;

/// Maximum single-visit duration in hours.
pub const MAX_VISIT_HOURS: f64 = 8.0;
