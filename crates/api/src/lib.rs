// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Suds booking engine.
//!
//! Translates wire-level requests into domain types, runs the engine, and
//! translates domain/core/persistence errors into the API contract. Nothing
//! here knows about HTTP; the server crate maps [`ApiError`] onto status
//! codes.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod bookings;
mod error;
mod quote;
mod request_response;
mod submit;

#[cfg(test)]
mod tests;

pub use bookings::{get_booking, list_bookings, update_booking_status};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use quote::{parse_extras_lenient, parse_frequency_or_default, parse_pace_or_default, quote};
pub use request_response::{
    BookingResponse, CreateBookingRequest, ListBookingsResponse, QuoteRequest, QuoteResponse,
    UpdateStatusRequest,
};
pub use submit::{BookingStore, build_draft, submit, submit_draft};
