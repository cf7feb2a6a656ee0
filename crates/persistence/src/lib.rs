// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` persistence for submitted bookings.
//!
//! `SQLite` is the only backend: it serves development, tests (in-memory)
//! and single-node deployments alike. The store owns one connection; the
//! server wraps it in a mutex for shared access.

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

mod error;
mod records;
mod schema;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use records::{BookingRecord, NewBookingRecord};
pub use schema::initialize_schema;
pub use store::SqliteStore;
