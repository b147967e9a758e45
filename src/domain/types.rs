//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty location text,
//! strictly positive radius, normalized/validated email) so that once a
//! value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided radius is zero, negative, or not a finite number.
    #[error("radius must be a positive number")]
    NonPositiveRadius,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Normalizes and validates an email string.
pub fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Free-text location entered by the user, trimmed and non-empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LocationText(String);

impl LocationText {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for LocationText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LocationText {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for LocationText {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationText> for String {
    fn from(value: LocationText) -> Self {
        value.0
    }
}

/// Search radius in kilometers, finite and strictly positive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct RadiusKm(f64);

impl RadiusKm {
    /// Constructs a radius ensuring it is a finite, positive number.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveRadius)
        }
    }

    /// Returns the raw `f64` backing this radius.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for RadiusKm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for RadiusKm {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RadiusKm> for f64 {
    fn from(value: RadiusKm) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_text_trims_and_rejects_empty() {
        let location = LocationText::new("  Paris  ").unwrap();
        assert_eq!(location.as_str(), "Paris");

        assert_eq!(
            LocationText::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
        assert_eq!(LocationText::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn radius_rejects_non_positive_values() {
        assert_eq!(RadiusKm::new(5.0).unwrap().get(), 5.0);
        assert_eq!(
            RadiusKm::new(0.0),
            Err(TypeConstraintError::NonPositiveRadius)
        );
        assert_eq!(
            RadiusKm::new(-3.0),
            Err(TypeConstraintError::NonPositiveRadius)
        );
        assert_eq!(
            RadiusKm::new(f64::NAN),
            Err(TypeConstraintError::NonPositiveRadius)
        );
        assert_eq!(
            RadiusKm::new(f64::INFINITY),
            Err(TypeConstraintError::NonPositiveRadius)
        );
    }

    #[test]
    fn email_is_lowercased_and_validated() {
        assert_eq!(
            normalize_email(" John@Example.COM ").unwrap(),
            "john@example.com"
        );
        assert_eq!(
            normalize_email("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }
}
