// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking estimation and step-progression engine.
//!
//! The engine turns an in-progress [`suds_domain::BookingDraft`] into a
//! validated step sequence and a live price/duration estimate. Pricing and
//! duration are pure functions that never fail; the only stateful piece is
//! [`BookingFlow`], which owns the draft, the current step, and the single
//! cancellable auto-advance timer. Time is injected as a parameter, never
//! read from a wall clock, so the timer is fully deterministic under test.

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
mod estimate;
mod flow;
mod pricing;
mod steps;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use estimate::estimate_hours;
pub use flow::{AUTO_ADVANCE_DELAY, BookingFlow, FlowEvent, PendingAdvance};
pub use pricing::calculate_total;
pub use steps::{Step, is_step_complete};
