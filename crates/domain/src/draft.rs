// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Extra, Frequency, Pace, ServiceDetails, TimeSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use time::Date;

/// Contact and address fields collected in the final form step.
///
/// All fields are optional until the contact step's completion predicate is
/// evaluated; validation lives in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactInfo {
    /// Customer first name.
    pub first_name: Option<String>,
    /// Customer last name.
    pub last_name: Option<String>,
    /// Customer email address.
    pub email: Option<String>,
    /// Customer phone number.
    pub phone: Option<String>,
    /// Street address of the property.
    pub address: Option<String>,
    /// Postal code of the property.
    pub postal_code: Option<String>,
}

/// The client-held snapshot of a not-yet-submitted booking.
///
/// The draft is owned by a single booking flow for the duration of the form;
/// nothing mutates it concurrently. Estimated hours and the total price are
/// always recomputed from these fields and never stored here as source of
/// truth. The only derived value a user can pin is the explicit
/// `hours_override`, which is validated against the bookable range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingDraft {
    /// Per-service-type property details. `None` until step 1 is filled in.
    pub details: Option<ServiceDetails>,
    /// Booking frequency. `None` until chosen.
    pub frequency: Option<Frequency>,
    /// Cleaning pace. Defaults to standard.
    pub pace: Pace,
    /// Selected extras. Set semantics: selecting twice is idempotent.
    pub extras: BTreeSet<Extra>,
    /// Scheduled visit date.
    pub date: Option<Date>,
    /// Preferred arrival window.
    pub time_slot: Option<TimeSlot>,
    /// Contact and address fields.
    pub contact: ContactInfo,
    /// Free-form instructions for the cleaner.
    pub special_instructions: Option<String>,
    /// Manual duration override in hours, replacing the estimate when set.
    pub hours_override: Option<f64>,
}

impl BookingDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extra to the selection. Idempotent.
    pub fn add_extra(&mut self, extra: Extra) {
        self.extras.insert(extra);
    }

    /// Removes an extra from the selection. Removing an unselected extra is
    /// a no-op.
    pub fn remove_extra(&mut self, extra: Extra) {
        self.extras.remove(&extra);
    }

    /// Toggles an extra in or out of the selection.
    pub fn toggle_extra(&mut self, extra: Extra) {
        if !self.extras.insert(extra) {
            self.extras.remove(&extra);
        }
    }
}
