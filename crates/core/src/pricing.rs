// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;
use suds_domain::{Extra, Frequency, RateTable, Surcharge};

/// Rounds to two decimal places for currency display.
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Computes the total price for a booking preview.
///
/// `hourly_rate(frequency) * hours` plus one contribution per selected
/// extra: time-based extras are billed at the booking's hourly rate, flat
/// extras at their fixed cost. Extras are a set, so each contributes once
/// no matter how often it was clicked. Pure function of its inputs and the
/// static rate table; never fails.
#[must_use]
pub fn calculate_total(hours: f64, frequency: Frequency, extras: &BTreeSet<Extra>) -> f64 {
    let rate: f64 = RateTable::hourly_rate(frequency);
    let extras_total: f64 = extras
        .iter()
        .map(|extra| match RateTable::extra_surcharge(*extra) {
            Surcharge::Hours(surcharge_hours) => surcharge_hours * rate,
            Surcharge::Flat(cost) => cost,
        })
        .sum();
    round_to_cents(rate.mul_add(hours, extras_total))
}
