// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::estimate_hours;
use crate::tests::helpers::home_details;
use suds_domain::{OfficeDetails, Pace, ServiceDetails};

#[test]
fn test_scenario_a_is_within_bounds_and_deterministic() {
    // size=70, bedrooms=2, bathrooms=1, standard pace
    let details: ServiceDetails = home_details(70, 2, 1);
    let first: f64 = estimate_hours(&details, Pace::Standard);
    let second: f64 = estimate_hours(&details, Pace::Standard);
    assert_eq!(first, second);
    assert!((2.0..=8.0).contains(&first));
    // 2.5 base + 2 * 0.5 bedrooms + 0 extra bathrooms
    assert_eq!(first, 3.5);
}

#[test]
fn test_base_hours_are_monotonic_in_size() {
    let mut previous: f64 = 0.0;
    for size in [10, 50, 80, 120, 160, 220] {
        let hours: f64 = estimate_hours(&home_details(size, 0, 0), Pace::Standard);
        assert!(hours >= previous, "estimate regressed at size {size}");
        previous = hours;
    }
}

#[test]
fn test_zero_size_uses_smallest_bracket() {
    assert_eq!(
        estimate_hours(&home_details(0, 0, 0), Pace::Standard),
        estimate_hours(&home_details(49, 0, 0), Pace::Standard)
    );
}

#[test]
fn test_first_bathroom_is_free_and_extra_bathrooms_add_time() {
    let none: f64 = estimate_hours(&home_details(100, 0, 0), Pace::Standard);
    let one: f64 = estimate_hours(&home_details(100, 0, 1), Pace::Standard);
    let three: f64 = estimate_hours(&home_details(100, 0, 3), Pace::Standard);
    assert_eq!(none, one);
    assert_eq!(three, one + 1.0);
}

#[test]
fn test_each_bedroom_adds_half_an_hour() {
    let base: f64 = estimate_hours(&home_details(100, 0, 0), Pace::Standard);
    let two: f64 = estimate_hours(&home_details(100, 2, 0), Pace::Standard);
    assert_eq!(two, base + 1.0);
}

#[test]
fn test_quick_pace_is_twenty_percent_faster_within_rounding() {
    for (size, bedrooms, bathrooms) in [(70, 2, 1), (100, 3, 2), (160, 4, 2)] {
        let details: ServiceDetails = home_details(size, bedrooms, bathrooms);
        let standard: f64 = estimate_hours(&details, Pace::Standard);
        let quick: f64 = estimate_hours(&details, Pace::Quick);
        // Both sides are rounded to the half hour, so allow a quarter hour
        // of slack around the exact 0.8 factor.
        let expected: f64 = (standard * 0.8).clamp(2.0, 8.0);
        assert!(
            (quick - expected).abs() <= 0.25,
            "quick={quick} expected~{expected}"
        );
        assert!((2.0..=8.0).contains(&quick));
    }
}

#[test]
fn test_result_is_clamped_to_the_bookable_range() {
    // A palace with many rooms still fits a single visit.
    let palace: f64 = estimate_hours(&home_details(900, 12, 9), Pace::Standard);
    assert_eq!(palace, 8.0);

    // A broom closet still gets the minimum visit.
    let closet: f64 = estimate_hours(&home_details(5, 0, 0), Pace::Quick);
    assert_eq!(closet, 2.0);
}

#[test]
fn test_office_estimate_ignores_bedrooms() {
    let office: ServiceDetails = ServiceDetails::Office(OfficeDetails {
        size_sqm: 100,
        bathrooms: 1,
    });
    assert_eq!(
        estimate_hours(&office, Pace::Standard),
        estimate_hours(&home_details(100, 0, 1), Pace::Standard)
    );
}

#[test]
fn test_estimates_land_on_half_hour_boundaries() {
    for (size, bedrooms, bathrooms, pace) in [
        (70, 2, 1, Pace::Quick),
        (85, 1, 2, Pace::Quick),
        (130, 3, 2, Pace::Standard),
    ] {
        let hours: f64 = estimate_hours(&home_details(size, bedrooms, bathrooms), pace);
        assert_eq!(hours * 2.0, (hours * 2.0).round());
    }
}
