// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::ContactInfo;
use crate::error::DomainError;
use crate::{MAX_VISIT_HOURS, MIN_VISIT_HOURS};

/// Validates an email address.
///
/// This is deliberately shallow: a non-empty local part, exactly one `@`,
/// and a dot somewhere in the domain. Deliverability is not our problem.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address fails the shape check.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(DomainError::InvalidEmail(String::from(
            "must contain exactly one '@'",
        )));
    };
    if local.is_empty() {
        return Err(DomainError::InvalidEmail(String::from(
            "missing local part before '@'",
        )));
    }
    if domain.len() < 3 || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(DomainError::InvalidEmail(String::from(
            "domain must contain a dot",
        )));
    }
    Ok(())
}

/// Validates a phone number.
///
/// Separators and a leading `+` are allowed; at least 7 digits must remain.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` if too few digits remain or an
/// unexpected character is present.
pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
    let digits: usize = phone.chars().filter(char::is_ascii_digit).count();
    let valid_chars: bool = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.'));
    if !valid_chars {
        return Err(DomainError::InvalidPhone(String::from(
            "contains unexpected characters",
        )));
    }
    if digits < 7 {
        return Err(DomainError::InvalidPhone(String::from(
            "must contain at least 7 digits",
        )));
    }
    Ok(())
}

/// Validates a postal code.
///
/// # Errors
///
/// Returns `DomainError::InvalidPostalCode` if the code is empty or
/// whitespace-only.
pub fn validate_postal_code(postal_code: &str) -> Result<(), DomainError> {
    if postal_code.trim().is_empty() {
        return Err(DomainError::InvalidPostalCode(String::from(
            "must not be empty",
        )));
    }
    Ok(())
}

/// Validates the full contact record required by the final form step.
///
/// Every field must be present, and email/phone/postal code must pass their
/// shape checks. The first failing rule is reported.
///
/// # Errors
///
/// Returns the `DomainError` for the first missing or invalid field.
pub fn validate_contact(contact: &ContactInfo) -> Result<(), DomainError> {
    let required: [(&'static str, Option<&String>); 6] = [
        ("first_name", contact.first_name.as_ref()),
        ("last_name", contact.last_name.as_ref()),
        ("email", contact.email.as_ref()),
        ("phone", contact.phone.as_ref()),
        ("address", contact.address.as_ref()),
        ("postal_code", contact.postal_code.as_ref()),
    ];
    for (field, value) in required {
        match value {
            None => return Err(DomainError::MissingContactField(field)),
            Some(v) if v.trim().is_empty() => {
                return Err(DomainError::MissingContactField(field));
            }
            Some(_) => {}
        }
    }

    // Presence guaranteed above.
    if let Some(email) = contact.email.as_ref() {
        validate_email(email)?;
    }
    if let Some(phone) = contact.phone.as_ref() {
        validate_phone(phone)?;
    }
    if let Some(postal_code) = contact.postal_code.as_ref() {
        validate_postal_code(postal_code)?;
    }
    Ok(())
}

/// Validates a manual hours override against the bookable range.
///
/// # Errors
///
/// Returns `DomainError::HoursOutOfRange` if the value is not a finite
/// number within [2, 8] hours.
pub fn validate_hours_override(hours: f64) -> Result<(), DomainError> {
    if !hours.is_finite() || hours < MIN_VISIT_HOURS || hours > MAX_VISIT_HOURS {
        return Err(DomainError::HoursOutOfRange {
            hours,
            min: MIN_VISIT_HOURS,
            max: MAX_VISIT_HOURS,
        });
    }
    Ok(())
}
