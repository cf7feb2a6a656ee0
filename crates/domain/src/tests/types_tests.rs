// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingStatus, DomainError, Extra, Frequency, OfficeDetails, Pace, ResidentialDetails,
    ServiceDetails, ServiceType,
};
use std::str::FromStr;

#[test]
fn test_service_type_round_trips_through_strings() {
    for service_type in [
        ServiceType::Home,
        ServiceType::Office,
        ServiceType::DeepClean,
        ServiceType::MoveInOut,
        ServiceType::PostConstruction,
    ] {
        let parsed: ServiceType = ServiceType::from_str(service_type.as_str()).unwrap();
        assert_eq!(parsed, service_type);
    }
}

#[test]
fn test_unknown_service_type_is_rejected() {
    let result: Result<ServiceType, DomainError> = ServiceType::from_str("garage");
    assert_eq!(
        result,
        Err(DomainError::UnknownServiceType(String::from("garage")))
    );
}

#[test]
fn test_frequency_round_trips_through_strings() {
    for frequency in [
        Frequency::OneTime,
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
    ] {
        let parsed: Frequency = Frequency::from_str(frequency.as_str()).unwrap();
        assert_eq!(parsed, frequency);
    }
}

#[test]
fn test_pace_defaults_to_standard() {
    assert_eq!(Pace::default(), Pace::Standard);
}

#[test]
fn test_extra_unknown_identifier_is_rejected() {
    assert!(Extra::from_str("chandelier").is_err());
}

#[test]
fn test_status_lifecycle_permits_forward_transitions() {
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
    assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
    assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
}

#[test]
fn test_status_lifecycle_rejects_backward_and_terminal_transitions() {
    assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Confirmed));
    assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Pending));
    assert!(BookingStatus::Completed.is_terminal());
    assert!(BookingStatus::Cancelled.is_terminal());
}

#[test]
fn test_office_details_have_no_bedrooms() {
    let details: ServiceDetails = ServiceDetails::Office(OfficeDetails {
        size_sqm: 250,
        bathrooms: 3,
    });
    assert_eq!(details.service_type(), ServiceType::Office);
    assert_eq!(details.bedrooms(), 0);
    assert_eq!(details.bathrooms(), 3);
    assert_eq!(details.size_sqm(), 250);
}

#[test]
fn test_from_parts_discards_bedrooms_for_offices() {
    let details: ServiceDetails = ServiceDetails::from_parts(ServiceType::Office, 120, 4, 2);
    assert_eq!(details.bedrooms(), 0);

    let home: ServiceDetails = ServiceDetails::from_parts(ServiceType::Home, 120, 4, 2);
    assert_eq!(
        home,
        ServiceDetails::Home(ResidentialDetails {
            size_sqm: 120,
            bedrooms: 4,
            bathrooms: 2,
        })
    );
}
