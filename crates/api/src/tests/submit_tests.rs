// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::request_response::CreateBookingRequest;
use crate::submit::{build_draft, submit, submit_draft};
use crate::tests::helpers::{CountingFailingStore, FailingStore, valid_booking_request};
use suds_booking::BookingFlow;
use suds_domain::{
    BookingDraft, ContactInfo, Frequency, ResidentialDetails, ServiceDetails, ServiceType,
    TimeSlot,
};
use suds_persistence::{BookingRecord, SqliteStore};
use time::OffsetDateTime;
use time::macros::{date, datetime};

fn now() -> OffsetDateTime {
    datetime!(2026-03-01 10:00:00 UTC)
}

fn complete_flow() -> BookingFlow {
    let mut flow: BookingFlow = BookingFlow::new(false);
    flow.set_service_details(
        Some(ServiceDetails::Home(ResidentialDetails {
            size_sqm: 75,
            bedrooms: 2,
            bathrooms: 1,
        })),
        now(),
    );
    flow.set_frequency(Some(Frequency::Weekly), now());
    flow.set_schedule(Some(date!(2026 - 03 - 14)), Some(TimeSlot::Morning), now());
    flow.set_contact(
        ContactInfo {
            first_name: Some(String::from("Maja")),
            last_name: Some(String::from("Lindqvist")),
            email: Some(String::from("maja@example.com")),
            phone: Some(String::from("+46 70 123 45 67")),
            address: Some(String::from("Storgatan 12")),
            postal_code: Some(String::from("114 55")),
        },
        now(),
    );
    flow
}

#[test]
fn test_valid_request_round_trips_into_a_persisted_record() {
    let draft: BookingDraft = build_draft(&valid_booking_request()).unwrap();
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();

    let record: BookingRecord = submit_draft(&draft, &mut store).unwrap();
    assert!(record.booking_id > 0);
    assert_eq!(record.service_type, ServiceType::Home);
    assert_eq!(record.hours, 3.5);
    assert_eq!(record.frequency, Frequency::Weekly);
    assert_eq!(record.date, "2026-03-14");
    // 3.5h at 27/h, plus oven (1h) and fridge (0.5h) at the same rate.
    assert_eq!(record.total_price, 135.00);
    assert_eq!(
        record.special_instructions.as_deref(),
        Some("Spare key under the mat")
    );
}

#[test]
fn test_hours_override_in_the_request_is_booked_verbatim() {
    let mut request: CreateBookingRequest = valid_booking_request();
    request.hours = Some(5.0);
    request.extras = Vec::new();
    let draft: BookingDraft = build_draft(&request).unwrap();
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();

    let record: BookingRecord = submit_draft(&draft, &mut store).unwrap();
    assert_eq!(record.hours, 5.0);
    assert_eq!(record.total_price, 135.00);
}

#[test]
fn test_unknown_extra_fails_submission_parsing() {
    let mut request: CreateBookingRequest = valid_booking_request();
    request.extras.push(String::from("chimney"));
    let err: ApiError = build_draft(&request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "extras"));
}

#[test]
fn test_malformed_date_is_rejected() {
    let mut request: CreateBookingRequest = valid_booking_request();
    request.date = String::from("14/03/2026");
    let err: ApiError = build_draft(&request).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "date"));
}

#[test]
fn test_invalid_email_blocks_submission_before_storage() {
    let mut request: CreateBookingRequest = valid_booking_request();
    request.email = String::from("maja.example.com");
    let draft: BookingDraft = build_draft(&request).unwrap();
    let mut store: CountingFailingStore = CountingFailingStore { attempts: 0 };

    let err: ApiError = submit_draft(&draft, &mut store).unwrap_err();
    assert!(matches!(err, ApiError::IncompleteDraft { step, .. } if step == "Contact & Payment"));
    assert_eq!(store.attempts, 0);
}

#[test]
fn test_incomplete_schedule_blocks_submission() {
    let mut draft: BookingDraft = build_draft(&valid_booking_request()).unwrap();
    draft.time_slot = None;
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();

    let err: ApiError = submit_draft(&draft, &mut store).unwrap_err();
    assert!(matches!(err, ApiError::IncompleteDraft { step, .. } if step == "Schedule & Extras"));
}

#[test]
fn test_successful_submit_resets_the_flow() {
    let mut flow: BookingFlow = complete_flow();
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();

    let record: BookingRecord = submit(&mut flow, &mut store).unwrap();
    assert!(record.booking_id > 0);
    assert!(flow.draft().details.is_none());
    assert!(!flow.is_submitting());
}

#[test]
fn test_storage_failure_preserves_the_draft_for_retry() {
    let mut flow: BookingFlow = complete_flow();
    let mut failing: FailingStore = FailingStore;

    let err: ApiError = submit(&mut flow, &mut failing).unwrap_err();
    assert!(matches!(err, ApiError::Storage { .. }));
    assert!(flow.draft().details.is_some());
    assert!(!flow.is_submitting());

    // The same flow retries cleanly against a working store.
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    assert!(submit(&mut flow, &mut store).is_ok());
}

#[test]
fn test_submission_in_flight_blocks_a_second_submit() {
    let mut flow: BookingFlow = complete_flow();
    flow.begin_submission().unwrap();

    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let err: ApiError = submit(&mut flow, &mut store).unwrap_err();
    assert_eq!(err, ApiError::SubmissionInFlight);
}

#[test]
fn test_office_request_discards_bedrooms() {
    let mut request: CreateBookingRequest = valid_booking_request();
    request.service_type = String::from("office");
    request.bedrooms = 4;
    request.extras = Vec::new();
    let draft: BookingDraft = build_draft(&request).unwrap();
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();

    let record: BookingRecord = submit_draft(&draft, &mut store).unwrap();
    assert_eq!(record.service_type, ServiceType::Office);
    assert_eq!(record.bedrooms, 0);
}
