// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking submission adapter.
//!
//! Turns a wire-level [`CreateBookingRequest`] into a validated draft, checks
//! every step's completion predicate, and hands the finished record to a
//! storage collaborator. A storage failure leaves the flow's draft untouched
//! so the customer can retry.

use std::str::FromStr;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::CreateBookingRequest;
use suds_booking::{BookingFlow, Step, calculate_total, estimate_hours, is_step_complete};
use suds_domain::{
    BookingDraft, ContactInfo, Extra, Frequency, Pace, ServiceDetails, ServiceType, TimeSlot,
    validate_contact, validate_hours_override,
};
use suds_persistence::{BookingRecord, NewBookingRecord, PersistenceError, SqliteStore};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::info;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Where finished bookings go.
///
/// The submission adapter only needs insertion; keeping the seam this narrow
/// lets tests substitute a failing store without a database.
pub trait BookingStore {
    /// Inserts a validated booking and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns a `PersistenceError` if the insert fails.
    fn insert_booking(&mut self, record: &NewBookingRecord)
    -> Result<BookingRecord, PersistenceError>;
}

impl BookingStore for SqliteStore {
    fn insert_booking(
        &mut self,
        record: &NewBookingRecord,
    ) -> Result<BookingRecord, PersistenceError> {
        Self::insert_booking(self, record)
    }
}

/// Builds a draft from a wire-level booking request.
///
/// Submission parsing is strict: every enum string must name a known value
/// and the date must be ISO 8601 (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for any field that fails to parse.
pub fn build_draft(request: &CreateBookingRequest) -> Result<BookingDraft, ApiError> {
    let service_type: ServiceType =
        ServiceType::from_str(&request.service_type).map_err(translate_domain_error)?;
    let frequency: Frequency =
        Frequency::from_str(&request.frequency).map_err(translate_domain_error)?;
    let time_slot: TimeSlot =
        TimeSlot::from_str(&request.preferred_time).map_err(translate_domain_error)?;
    let pace: Pace = match request.pace.as_deref() {
        Some(raw) => Pace::from_str(raw).map_err(translate_domain_error)?,
        None => Pace::default(),
    };
    let date: Date = Date::parse(&request.date, DATE_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: String::from("date"),
        message: format!("{:?} is not a valid YYYY-MM-DD date", request.date),
    })?;

    let mut draft: BookingDraft = BookingDraft::new();
    draft.details = Some(ServiceDetails::from_parts(
        service_type,
        request.size_sqm,
        request.bedrooms,
        request.bathrooms,
    ));
    draft.frequency = Some(frequency);
    draft.pace = pace;
    for raw in &request.extras {
        let extra: Extra = Extra::from_str(raw).map_err(translate_domain_error)?;
        draft.add_extra(extra);
    }
    draft.date = Some(date);
    draft.time_slot = Some(time_slot);
    draft.contact = ContactInfo {
        first_name: Some(request.first_name.clone()),
        last_name: Some(request.last_name.clone()),
        email: Some(request.email.clone()),
        phone: Some(request.phone.clone()),
        address: Some(request.address.clone()),
        postal_code: Some(request.postal_code.clone()),
    };
    draft.special_instructions = request.special_instructions.clone();
    if let Some(hours) = request.hours {
        validate_hours_override(hours).map_err(translate_domain_error)?;
        draft.hours_override = Some(hours);
    }
    Ok(draft)
}

/// Validates a draft against every step's completion predicate and persists
/// it.
///
/// # Errors
///
/// Returns `ApiError::IncompleteDraft` if any step predicate fails, or a
/// storage error if the insert does.
pub fn submit_draft<S: BookingStore>(
    draft: &BookingDraft,
    store: &mut S,
) -> Result<BookingRecord, ApiError> {
    for step in Step::all() {
        if !is_step_complete(draft, step) {
            return Err(incomplete(draft, step));
        }
    }

    let Some(details) = draft.details.as_ref() else {
        return Err(incomplete(draft, Step::ServiceDetails));
    };
    let (Some(frequency), Some(date), Some(preferred_time)) =
        (draft.frequency, draft.date, draft.time_slot)
    else {
        return Err(incomplete(draft, Step::ScheduleExtras));
    };
    let contact: &ContactInfo = &draft.contact;
    let (
        Some(first_name),
        Some(last_name),
        Some(email),
        Some(phone),
        Some(address),
        Some(postal_code),
    ) = (
        contact.first_name.clone(),
        contact.last_name.clone(),
        contact.email.clone(),
        contact.phone.clone(),
        contact.address.clone(),
        contact.postal_code.clone(),
    )
    else {
        return Err(incomplete(draft, Step::ContactPayment));
    };

    let hours: f64 = draft
        .hours_override
        .unwrap_or_else(|| estimate_hours(details, draft.pace));
    let total_price: f64 = calculate_total(hours, frequency, &draft.extras);
    let date: String = date.format(DATE_FORMAT).map_err(|err| ApiError::Internal {
        message: format!("Failed to format booking date: {err}"),
    })?;

    let record: NewBookingRecord = NewBookingRecord {
        service_type: details.service_type(),
        hours,
        bedrooms: details.bedrooms(),
        bathrooms: details.bathrooms(),
        frequency,
        date,
        preferred_time,
        extras: draft.extras.clone(),
        first_name,
        last_name,
        email,
        phone,
        address,
        postal_code,
        special_instructions: draft.special_instructions.clone(),
        total_price,
    };

    let persisted: BookingRecord = store.insert_booking(&record)?;
    info!(
        booking_id = persisted.booking_id,
        service_type = persisted.service_type.as_str(),
        total_price = persisted.total_price,
        "Booking submitted"
    );
    Ok(persisted)
}

/// Submits the flow's current draft through a storage collaborator.
///
/// The flow's in-flight flag guards against double submission. On success
/// the flow is reset to a fresh form; on any failure the draft is preserved
/// so the customer can correct and retry.
///
/// # Errors
///
/// Returns `ApiError::SubmissionInFlight` if a submission is already
/// outstanding, an incomplete-draft or validation error from
/// [`submit_draft`], or a storage error.
pub fn submit<S: BookingStore>(
    flow: &mut BookingFlow,
    store: &mut S,
) -> Result<BookingRecord, ApiError> {
    flow.begin_submission().map_err(translate_core_error)?;
    let result: Result<BookingRecord, ApiError> = submit_draft(flow.draft(), store);
    flow.end_submission();
    if result.is_ok() {
        flow.reset();
    }
    result
}

/// Builds the incomplete-draft error for a failed step predicate, reporting
/// the specific contact problem when the contact step is the one at fault.
fn incomplete(draft: &BookingDraft, step: Step) -> ApiError {
    let message: String = match step {
        Step::ServiceDetails => String::from("property details with a positive size are required"),
        Step::ScheduleExtras => String::from("frequency, date, and time slot are required"),
        Step::ContactPayment => validate_contact(&draft.contact)
            .err()
            .map_or_else(|| String::from("contact details are required"), |err| err.to_string()),
    };
    ApiError::IncompleteDraft {
        step: String::from(step.label()),
        message,
    }
}
