// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::sample_booking;
use crate::{BookingRecord, NewBookingRecord, PersistenceError, SqliteStore};
use std::collections::BTreeSet;
use suds_domain::{BookingStatus, Extra, ServiceType};

#[test]
fn test_insert_returns_persisted_record_with_id_and_pending_status() {
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let record: BookingRecord = store.insert_booking(&sample_booking()).unwrap();

    assert!(record.booking_id > 0);
    assert_eq!(record.status, BookingStatus::Pending);
    assert_eq!(record.service_type, ServiceType::Home);
    assert_eq!(record.hours, 3.5);
    assert_eq!(record.total_price, 135.0);
    assert!(!record.created_at.is_empty());
}

#[test]
fn test_extras_survive_the_json_round_trip() {
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let inserted: BookingRecord = store.insert_booking(&sample_booking()).unwrap();
    let fetched: BookingRecord = store.get_booking(inserted.booking_id).unwrap();
    assert_eq!(
        fetched.extras,
        BTreeSet::from([Extra::Oven, Extra::Fridge])
    );
}

#[test]
fn test_empty_extras_and_missing_instructions_are_fine() {
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let mut record: NewBookingRecord = sample_booking();
    record.extras = BTreeSet::new();
    record.special_instructions = None;

    let inserted: BookingRecord = store.insert_booking(&record).unwrap();
    assert!(inserted.extras.is_empty());
    assert!(inserted.special_instructions.is_none());
}

#[test]
fn test_get_unknown_booking_reports_not_found() {
    let store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    assert_eq!(
        store.get_booking(99),
        Err(PersistenceError::BookingNotFound(99))
    );
}

#[test]
fn test_list_returns_newest_first() {
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let first: BookingRecord = store.insert_booking(&sample_booking()).unwrap();
    let second: BookingRecord = store.insert_booking(&sample_booking()).unwrap();

    let listed: Vec<BookingRecord> = store.list_bookings().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].booking_id, second.booking_id);
    assert_eq!(listed[1].booking_id, first.booking_id);
}

#[test]
fn test_list_by_status_filters() {
    let mut store: SqliteStore = SqliteStore::new_in_memory().unwrap();
    let first: BookingRecord = store.insert_booking(&sample_booking()).unwrap();
    store.insert_booking(&sample_booking()).unwrap();
    store
        .update_status(first.booking_id, BookingStatus::Confirmed)
        .unwrap();

    let pending: Vec<BookingRecord> = store
        .list_bookings_by_status(BookingStatus::Pending)
        .unwrap();
    let confirmed: Vec<BookingRecord> = store
        .list_bookings_by_status(BookingStatus::Confirmed)
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(confirmed.len(), 1);
    assert_eq!(confirmed[0].booking_id, first.booking_id);
}
