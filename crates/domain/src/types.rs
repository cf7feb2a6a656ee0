// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of cleaning service being booked.
///
/// Service types are fixed domain constants; there is no open-ended
/// service catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Regular home cleaning.
    #[serde(rename = "home")]
    Home,
    /// Office / commercial space cleaning.
    #[serde(rename = "office")]
    Office,
    /// Intensive deep clean of a residence.
    #[serde(rename = "deep-clean")]
    DeepClean,
    /// Move-in / move-out cleaning.
    #[serde(rename = "move-in-out")]
    MoveInOut,
    /// Post-construction cleanup.
    #[serde(rename = "post-construction")]
    PostConstruction,
}

impl ServiceType {
    /// Returns the wire/persistence string for this service type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Office => "office",
            Self::DeepClean => "deep-clean",
            Self::MoveInOut => "move-in-out",
            Self::PostConstruction => "post-construction",
        }
    }
}

impl FromStr for ServiceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "office" => Ok(Self::Office),
            "deep-clean" => Ok(Self::DeepClean),
            "move-in-out" => Ok(Self::MoveInOut),
            "post-construction" => Ok(Self::PostConstruction),
            _ => Err(DomainError::UnknownServiceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How often the booking recurs.
///
/// The frequency determines the hourly rate: recurring visits are cheaper
/// per hour than one-time visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// A single, non-recurring visit.
    #[default]
    #[serde(rename = "one-time")]
    OneTime,
    /// Every week.
    #[serde(rename = "weekly")]
    Weekly,
    /// Every two weeks.
    #[serde(rename = "bi-weekly")]
    BiWeekly,
    /// Once a month.
    #[serde(rename = "monthly")]
    Monthly,
}

impl Frequency {
    /// Returns the wire/persistence string for this frequency.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-time" => Ok(Self::OneTime),
            "weekly" => Ok(Self::Weekly),
            "bi-weekly" => Ok(Self::BiWeekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(DomainError::UnknownFrequency(s.to_string())),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cleaning pace selected by the customer.
///
/// Quick pace shortens the estimated visit by 20%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Pace {
    /// Faster, lighter pass over the property.
    #[serde(rename = "quick")]
    Quick,
    /// The regular, thorough pace.
    #[default]
    #[serde(rename = "standard")]
    Standard,
}

impl Pace {
    /// Returns the wire string for this pace.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Standard => "standard",
        }
    }
}

impl FromStr for Pace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(Self::Quick),
            "standard" => Ok(Self::Standard),
            _ => Err(DomainError::UnknownPace(s.to_string())),
        }
    }
}

/// An optional add-on service with its own time or flat-cost surcharge.
///
/// Extras form a closed set; selection is set-semantic, so picking the same
/// extra twice is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Extra {
    /// Inside-oven cleaning.
    #[serde(rename = "oven")]
    Oven,
    /// Inside-fridge cleaning.
    #[serde(rename = "fridge")]
    Fridge,
    /// Interior window cleaning.
    #[serde(rename = "windows")]
    Windows,
    /// One load of laundry, washed and folded.
    #[serde(rename = "laundry")]
    Laundry,
    /// Inside-cabinet cleaning.
    #[serde(rename = "cabinets")]
    Cabinets,
    /// Cleaning supplies provided by the cleaner.
    #[serde(rename = "supplies")]
    Supplies,
}

impl Extra {
    /// Returns the wire/persistence identifier for this extra.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oven => "oven",
            Self::Fridge => "fridge",
            Self::Windows => "windows",
            Self::Laundry => "laundry",
            Self::Cabinets => "cabinets",
            Self::Supplies => "supplies",
        }
    }
}

impl FromStr for Extra {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oven" => Ok(Self::Oven),
            "fridge" => Ok(Self::Fridge),
            "windows" => Ok(Self::Windows),
            "laundry" => Ok(Self::Laundry),
            "cabinets" => Ok(Self::Cabinets),
            "supplies" => Ok(Self::Supplies),
            _ => Err(DomainError::UnknownExtra(s.to_string())),
        }
    }
}

impl std::fmt::Display for Extra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preferred arrival window for the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 08:00 - 12:00.
    #[serde(rename = "morning")]
    Morning,
    /// 12:00 - 16:00.
    #[serde(rename = "afternoon")]
    Afternoon,
    /// 16:00 - 20:00.
    #[serde(rename = "evening")]
    Evening,
}

impl TimeSlot {
    /// Returns the wire/persistence string for this time slot.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            _ => Err(DomainError::UnknownTimeSlot(s.to_string())),
        }
    }
}

/// Lifecycle status of a persisted booking.
///
/// Only the transitions permitted by [`Self::can_transition_to`] are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Submitted, awaiting confirmation.
    #[default]
    #[serde(rename = "pending")]
    Pending,
    /// Confirmed by an administrator or provider.
    #[serde(rename = "confirmed")]
    Confirmed,
    /// The visit took place.
    #[serde(rename = "completed")]
    Completed,
    /// Cancelled before completion.
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl BookingStatus {
    /// Returns the wire/persistence string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks whether a transition from this status to another is legal.
    ///
    /// Valid transitions are:
    /// - Pending → Confirmed
    /// - Pending → Cancelled
    /// - Confirmed → Completed
    /// - Confirmed → Cancelled
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending | Self::Confirmed, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
        )
    }

    /// Returns whether this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Property details for residential service types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResidentialDetails {
    /// Property size in square meters.
    pub size_sqm: u32,
    /// Number of bedrooms.
    pub bedrooms: u32,
    /// Number of bathrooms.
    pub bathrooms: u32,
}

/// Property details for office cleanings.
///
/// Offices have no bedrooms; the estimator treats the bedroom count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OfficeDetails {
    /// Floor space in square meters.
    pub size_sqm: u32,
    /// Number of bathrooms / restrooms.
    pub bathrooms: u32,
}

/// The typed per-service-type field set for a booking.
///
/// Each service type carries exactly the fields it requires, so a draft can
/// never hold an office booking with a bedroom count or a half-filled
/// free-form record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceDetails {
    /// Regular home cleaning.
    Home(ResidentialDetails),
    /// Intensive deep clean of a residence.
    DeepClean(ResidentialDetails),
    /// Move-in / move-out cleaning.
    MoveInOut(ResidentialDetails),
    /// Post-construction cleanup.
    PostConstruction(ResidentialDetails),
    /// Office / commercial space cleaning.
    Office(OfficeDetails),
}

impl ServiceDetails {
    /// Returns the service type of this detail record.
    #[must_use]
    pub const fn service_type(&self) -> ServiceType {
        match self {
            Self::Home(_) => ServiceType::Home,
            Self::DeepClean(_) => ServiceType::DeepClean,
            Self::MoveInOut(_) => ServiceType::MoveInOut,
            Self::PostConstruction(_) => ServiceType::PostConstruction,
            Self::Office(_) => ServiceType::Office,
        }
    }

    /// Returns the property size in square meters.
    #[must_use]
    pub const fn size_sqm(&self) -> u32 {
        match self {
            Self::Home(d) | Self::DeepClean(d) | Self::MoveInOut(d) | Self::PostConstruction(d) => {
                d.size_sqm
            }
            Self::Office(d) => d.size_sqm,
        }
    }

    /// Returns the bedroom count (zero for offices).
    #[must_use]
    pub const fn bedrooms(&self) -> u32 {
        match self {
            Self::Home(d) | Self::DeepClean(d) | Self::MoveInOut(d) | Self::PostConstruction(d) => {
                d.bedrooms
            }
            Self::Office(_) => 0,
        }
    }

    /// Returns the bathroom count.
    #[must_use]
    pub const fn bathrooms(&self) -> u32 {
        match self {
            Self::Home(d) | Self::DeepClean(d) | Self::MoveInOut(d) | Self::PostConstruction(d) => {
                d.bathrooms
            }
            Self::Office(d) => d.bathrooms,
        }
    }

    /// Builds a detail record from a service type and raw counts.
    ///
    /// Office bookings discard the bedroom count.
    #[must_use]
    pub const fn from_parts(
        service_type: ServiceType,
        size_sqm: u32,
        bedrooms: u32,
        bathrooms: u32,
    ) -> Self {
        let residential: ResidentialDetails = ResidentialDetails {
            size_sqm,
            bedrooms,
            bathrooms,
        };
        match service_type {
            ServiceType::Home => Self::Home(residential),
            ServiceType::DeepClean => Self::DeepClean(residential),
            ServiceType::MoveInOut => Self::MoveInOut(residential),
            ServiceType::PostConstruction => Self::PostConstruction(residential),
            ServiceType::Office => Self::Office(OfficeDetails {
                size_sqm,
                bathrooms,
            }),
        }
    }
}
