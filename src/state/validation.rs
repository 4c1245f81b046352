//! Field validation for the RSVP form
//!
//! Validation is a pure function of the current values. It never edits a
//! field; formatting happens as the user types (see `state::format`).

use super::forms::{FieldId, RsvpValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A complete phone number in display form
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("valid phone pattern"));

/// `@` followed by letters, digits, underscores or hyphens
pub static VENMO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[a-zA-Z0-9_-]+$").expect("valid venmo pattern"));

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required field left empty
    Required,
    /// Non-empty field that fails its pattern
    Format,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    fn required(message: &str) -> Self {
        Self {
            kind: ErrorKind::Required,
            message: message.to_string(),
        }
    }

    fn format(message: &str) -> Self {
        Self {
            kind: ErrorKind::Format,
            message: message.to_string(),
        }
    }
}

/// Errors keyed by field, iterated in form order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[cfg(test)]
    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// The error closest to the top of the form
    #[cfg(test)]
    pub fn first_field(&self) -> Option<FieldId> {
        self.errors.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldError)> {
        self.errors.iter().map(|(id, err)| (*id, err))
    }

    fn insert(&mut self, field: FieldId, error: FieldError) {
        self.errors.insert(field, error);
    }
}

/// Check the four required fields. Notes are never validated.
pub fn validate(values: &RsvpValues) -> ValidationResult {
    let mut result = ValidationResult::default();

    if values.name.trim().is_empty() {
        result.insert(FieldId::Name, FieldError::required("Full name is required"));
    }

    let phone = values.phone.trim();
    if phone.is_empty() {
        result.insert(
            FieldId::Phone,
            FieldError::required("Phone number is required"),
        );
    } else if !PHONE_PATTERN.is_match(phone) {
        result.insert(
            FieldId::Phone,
            FieldError::format("Please enter a valid phone number"),
        );
    }

    let venmo = values.venmo.trim();
    if venmo.is_empty() {
        result.insert(
            FieldId::Venmo,
            FieldError::required("Venmo username is required"),
        );
    } else if !VENMO_PATTERN.is_match(venmo) {
        result.insert(
            FieldId::Venmo,
            FieldError::format("Please enter a valid Venmo username (e.g., @username)"),
        );
    }

    if values.friday_dinner.is_none() {
        result.insert(
            FieldId::FridayDinner,
            FieldError::required("Please select if you'll attend Friday dinner"),
        );
    }

    result
}
