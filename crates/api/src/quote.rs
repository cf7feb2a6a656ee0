// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price and duration previews.
//!
//! Quotes are shown while the customer is still filling in the form, so the
//! parsing here is deliberately forgiving: unknown frequency, pace, or extra
//! strings are logged and replaced with defaults rather than failing the
//! request. Submission parsing in [`crate::submit`] is strict.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{QuoteRequest, QuoteResponse};
use suds_booking::{calculate_total, estimate_hours};
use suds_domain::{
    Extra, Frequency, Pace, RateTable, ServiceDetails, ServiceType, validate_hours_override,
};
use tracing::warn;

/// Parses a frequency string, falling back to the default on absence or an
/// unknown value.
#[must_use]
pub fn parse_frequency_or_default(value: Option<&str>) -> Frequency {
    value.map_or_else(Frequency::default, |raw| {
        Frequency::from_str(raw).unwrap_or_else(|_| {
            warn!("Unknown frequency {raw:?} in quote request, using default");
            Frequency::default()
        })
    })
}

/// Parses a pace string, falling back to the default on absence or an
/// unknown value.
#[must_use]
pub fn parse_pace_or_default(value: Option<&str>) -> Pace {
    value.map_or_else(Pace::default, |raw| {
        Pace::from_str(raw).unwrap_or_else(|_| {
            warn!("Unknown pace {raw:?} in quote request, using default");
            Pace::default()
        })
    })
}

/// Parses a list of extra strings, dropping entries that do not name a known
/// extra. Duplicates collapse via set semantics.
#[must_use]
pub fn parse_extras_lenient(values: &[String]) -> BTreeSet<Extra> {
    let mut extras: BTreeSet<Extra> = BTreeSet::new();
    for raw in values {
        match Extra::from_str(raw) {
            Ok(extra) => {
                extras.insert(extra);
            }
            Err(_) => warn!("Unknown extra {raw:?} in quote request, ignoring"),
        }
    }
    extras
}

/// Computes a price and duration preview.
///
/// The service type and property size must be valid; everything else falls
/// back to defaults. An explicit hours override replaces the estimate and is
/// validated against the bookable range.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an unknown service type, a zero
/// property size, or an out-of-range hours override.
pub fn quote(request: &QuoteRequest) -> Result<QuoteResponse, ApiError> {
    let service_type: ServiceType =
        ServiceType::from_str(&request.service_type).map_err(translate_domain_error)?;
    if request.size_sqm == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("size_sqm"),
            message: String::from("property size must be positive"),
        });
    }

    let details: ServiceDetails = ServiceDetails::from_parts(
        service_type,
        request.size_sqm,
        request.bedrooms,
        request.bathrooms,
    );
    let pace: Pace = parse_pace_or_default(request.pace.as_deref());
    let frequency: Frequency = parse_frequency_or_default(request.frequency.as_deref());
    let extras: BTreeSet<Extra> = parse_extras_lenient(&request.extras);

    let estimated_hours: f64 = match request.hours {
        Some(hours) => {
            validate_hours_override(hours).map_err(translate_domain_error)?;
            hours
        }
        None => estimate_hours(&details, pace),
    };
    let total_price: f64 = calculate_total(estimated_hours, frequency, &extras);

    Ok(QuoteResponse {
        estimated_hours,
        hourly_rate: RateTable::hourly_rate(frequency),
        total_price,
    })
}
