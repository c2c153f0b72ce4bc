//! Field validation rules for a [`ContactSubmission`].

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::form::model::{ContactSubmission, FieldId};

/// Loose "something@something.something" shape. Not RFC 5322.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Number of digits a phone number must contain.
pub const PHONE_DIGITS: usize = 10;

/// A single field's validation failure. `Display` is the message shown
/// next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please enter a valid 10-digit phone number")]
    PhoneInvalid,
    #[error("Date of birth is required")]
    DateOfBirthRequired,
    #[error("Please select a gender")]
    GenderRequired,
}

/// Per-field validation failures. A field without an entry is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldId) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: FieldId, error: FieldError) {
        self.errors.insert(field, error);
    }
}

/// Validate every field of `record`. All rules run; none short-circuit.
pub fn validate(record: &ContactSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if record.full_name.trim().is_empty() {
        errors.insert(FieldId::FullName, FieldError::FullNameRequired);
    }

    if let Err(error) = check_email(&record.email) {
        errors.insert(FieldId::Email, error);
    }

    if let Err(error) = check_phone(&record.phone) {
        errors.insert(FieldId::Phone, error);
    }

    if record.date_of_birth.is_none() {
        errors.insert(FieldId::DateOfBirth, FieldError::DateOfBirthRequired);
    }

    if record.gender.is_none() {
        errors.insert(FieldId::Gender, FieldError::GenderRequired);
    }

    errors
}

fn check_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_SHAPE.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

fn check_phone(phone: &str) -> Result<(), FieldError> {
    if phone.trim().is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    if phone_digits(phone).len() != PHONE_DIGITS {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}

/// `phone` with every non-digit character removed.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_is_unanchored() {
        assert!(check_email("contact me at a@b.co please").is_ok());
        assert_eq!(check_email("a@b"), Err(FieldError::EmailInvalid));
        assert_eq!(check_email("   "), Err(FieldError::EmailRequired));
    }

    #[test]
    fn phone_digits_strips_punctuation() {
        assert_eq!(phone_digits("(123) 456-7890"), "1234567890");
        assert_eq!(phone_digits("+1 555"), "1555");
    }

    #[test]
    fn phone_with_no_digits_is_invalid_not_missing() {
        assert_eq!(check_phone("call me"), Err(FieldError::PhoneInvalid));
        assert_eq!(check_phone(" \t"), Err(FieldError::PhoneRequired));
    }

    #[test]
    fn messages_match_display() {
        assert_eq!(
            FieldError::PhoneInvalid.to_string(),
            "Please enter a valid 10-digit phone number"
        );
        assert_eq!(FieldError::GenderRequired.to_string(), "Please select a gender");
    }
}
