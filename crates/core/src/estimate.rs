// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use suds_domain::{MAX_VISIT_HOURS, MIN_VISIT_HOURS, Pace, ServiceDetails};

/// Additional hours per bedroom.
const HOURS_PER_BEDROOM: f64 = 0.5;

/// Additional hours per bathroom beyond the first.
const HOURS_PER_EXTRA_BATHROOM: f64 = 0.5;

/// Duration multiplier for the quick pace (20% reduction).
const QUICK_PACE_FACTOR: f64 = 0.8;

/// Base visit hours for a property size, as a monotonic step function.
///
/// A size of zero lands in the smallest bracket rather than erroring; this
/// feeds a live preview and degrades instead of failing.
const fn base_hours(size_sqm: u32) -> f64 {
    match size_sqm {
        0..=49 => 2.0,
        50..=79 => 2.5,
        80..=119 => 3.0,
        120..=159 => 3.5,
        160..=199 => 4.0,
        _ => 4.5,
    }
}

/// Rounds to the nearest half hour, the booking granularity.
fn round_to_half(hours: f64) -> f64 {
    (hours * 2.0).round() / 2.0
}

/// Estimates the recommended visit duration in hours.
///
/// Starts from a size-bracket base, adds fixed increments per bedroom and
/// per bathroom beyond the first, applies the quick-pace reduction, rounds
/// to the nearest half hour, and clamps to the bookable range of
/// [2, 8] hours. Pure and deterministic; never fails.
#[must_use]
pub fn estimate_hours(details: &ServiceDetails, pace: Pace) -> f64 {
    let mut hours: f64 = base_hours(details.size_sqm());
    hours = f64::from(details.bedrooms()).mul_add(HOURS_PER_BEDROOM, hours);
    hours = f64::from(details.bathrooms().saturating_sub(1))
        .mul_add(HOURS_PER_EXTRA_BATHROOM, hours);

    if pace == Pace::Quick {
        hours *= QUICK_PACE_FACTOR;
    }

    round_to_half(hours).clamp(MIN_VISIT_HOURS, MAX_VISIT_HOURS)
}
