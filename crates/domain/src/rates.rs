// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Extra, Frequency};

/// The surcharge attached to an extra service.
///
/// Time-based extras extend the visit and are billed at the visit's hourly
/// rate; flat extras add a fixed amount regardless of rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surcharge {
    /// Extra visit time in hours, billed at the booking's hourly rate.
    Hours(f64),
    /// A fixed cost independent of the hourly rate.
    Flat(f64),
}

/// The static pricing table.
///
/// Rates are domain constants loaded once at compile time and never mutated.
/// Lookups cannot fail: frequencies and extras are closed enums, and the
/// wire-level parsers that admit free-form strings fall back to the
/// documented defaults instead of erroring, since this feeds a pricing
/// preview rather than a ledger.
#[derive(Debug, Clone, Copy)]
pub struct RateTable;

impl RateTable {
    /// Fallback hourly rate used when a wire-level frequency is unknown.
    ///
    /// Equal to the one-time rate, the most conservative (highest) rate.
    pub const DEFAULT_HOURLY_RATE: f64 = 35.0;

    /// Returns the hourly rate for a booking frequency.
    #[must_use]
    pub const fn hourly_rate(frequency: Frequency) -> f64 {
        match frequency {
            Frequency::OneTime => 35.0,
            Frequency::Weekly => 27.0,
            Frequency::BiWeekly => 29.0,
            Frequency::Monthly => 32.0,
        }
    }

    /// Returns the surcharge for an extra service.
    #[must_use]
    pub const fn extra_surcharge(extra: Extra) -> Surcharge {
        match extra {
            Extra::Oven | Extra::Windows => Surcharge::Hours(1.0),
            Extra::Fridge | Extra::Laundry | Extra::Cabinets => Surcharge::Hours(0.5),
            Extra::Supplies => Surcharge::Flat(12.0),
        }
    }
}
