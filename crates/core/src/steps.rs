// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use suds_domain::{BookingDraft, validate_contact};

/// A step in the fixed, linear booking form sequence.
///
/// Indices are 1-based and contiguous; there is no conditional skipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Step 1: service type and property details.
    ServiceDetails,
    /// Step 2: frequency, date, time slot, and extras.
    ScheduleExtras,
    /// Step 3: contact and payment details.
    ContactPayment,
}

impl Step {
    /// Number of steps in the booking flow.
    pub const COUNT: u8 = 3;

    /// Returns the 1-based index of this step.
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::ServiceDetails => 1,
            Self::ScheduleExtras => 2,
            Self::ContactPayment => 3,
        }
    }

    /// Returns the human-readable label for this step.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ServiceDetails => "Service Details",
            Self::ScheduleExtras => "Schedule & Extras",
            Self::ContactPayment => "Contact & Payment",
        }
    }

    /// Looks a step up by its 1-based index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::ServiceDetails),
            2 => Some(Self::ScheduleExtras),
            3 => Some(Self::ContactPayment),
            _ => None,
        }
    }

    /// Returns the following step, or `None` on the last step.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::ServiceDetails => Some(Self::ScheduleExtras),
            Self::ScheduleExtras => Some(Self::ContactPayment),
            Self::ContactPayment => None,
        }
    }

    /// Returns the preceding step, or `None` on the first step.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::ServiceDetails => None,
            Self::ScheduleExtras => Some(Self::ServiceDetails),
            Self::ContactPayment => Some(Self::ScheduleExtras),
        }
    }

    /// All steps in form order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::ServiceDetails, Self::ScheduleExtras, Self::ContactPayment]
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Evaluates a step's completion predicate over the current draft.
///
/// - Service details: typed detail record present with a positive size.
/// - Schedule & extras: frequency, date, and time slot chosen. Extras are
///   optional.
/// - Contact & payment: the full contact record present and valid.
#[must_use]
pub fn is_step_complete(draft: &BookingDraft, step: Step) -> bool {
    match step {
        Step::ServiceDetails => draft
            .details
            .as_ref()
            .is_some_and(|details| details.size_sqm() > 0),
        Step::ScheduleExtras => {
            draft.frequency.is_some() && draft.date.is_some() && draft.time_slot.is_some()
        }
        Step::ContactPayment => validate_contact(&draft.contact).is_ok(),
    }
}
