//! Validation result types
//!
//! Defines the accept/reject values returned by the field validators.

use std::fmt;

/// Reason a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyFullName,
    InvalidFullNameChars,
    EmptyAge,
    AgeNotDigits,
    AgeUnparseable,
    AgeOutOfRange,
    EmptyPhone,
    PhoneWrongLength,
    PhoneMissingPlus,
    PhoneWrongCountryCode,
    PhoneWrongOperatorDigit,
    PhoneNotDigits,
    EmptyEmail,
    EmailAtCount,
    EmailAtPosition,
    EmailMissingDot,
    EmailEmptyDomainLabel,
    EmailEmptyTopLevel,
    EmailInvalidLocalChars,
    EmailInvalidDomainChars,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Rejection::EmptyFullName => "Full name cannot be empty",
            Rejection::InvalidFullNameChars => {
                "Full name may only contain letters, spaces and hyphens"
            }
            Rejection::EmptyAge => "Age cannot be empty",
            Rejection::AgeNotDigits => "Age must contain only digits",
            Rejection::AgeUnparseable => "Age has an invalid format",
            Rejection::AgeOutOfRange => "Age must be between 1 and 150",
            Rejection::EmptyPhone => "Phone cannot be empty",
            Rejection::PhoneWrongLength => "Phone must be 12 characters long (including +7)",
            Rejection::PhoneMissingPlus => "Phone must start with +",
            Rejection::PhoneWrongCountryCode => "Phone must start with +7",
            Rejection::PhoneWrongOperatorDigit => "Third character of the phone must be 9",
            Rejection::PhoneNotDigits => "Phone must contain only digits after +7",
            Rejection::EmptyEmail => "Email cannot be empty",
            Rejection::EmailAtCount => "Email must contain exactly one @",
            Rejection::EmailAtPosition => "@ cannot be at the start or end of the email",
            Rejection::EmailMissingDot => "Email must contain a dot after @",
            Rejection::EmailEmptyDomainLabel => {
                "Email domain must have characters between @ and the dot"
            }
            Rejection::EmailEmptyTopLevel => "Email must have a domain after the dot",
            Rejection::EmailInvalidLocalChars => {
                "Email local part may only contain letters, digits, hyphens and dots"
            }
            Rejection::EmailInvalidDomainChars => {
                "Email domain may only contain letters, digits and hyphens"
            }
        };
        f.write_str(message)
    }
}

/// Outcome of validating a single field.
///
/// `reason` is empty when the field was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub reason: String,
    rejection: Option<Rejection>,
}

impl ValidationResult {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: String::new(),
            rejection: None,
        }
    }

    pub fn reject(rejection: Rejection) -> Self {
        Self {
            accepted: false,
            reason: rejection.to_string(),
            rejection: Some(rejection),
        }
    }

    /// The typed rejection, if any
    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    pub fn into_result(self) -> Result<(), Rejection> {
        match self.rejection {
            Some(rejection) => Err(rejection),
            None => Ok(()),
        }
    }
}

impl From<Result<(), Rejection>> for ValidationResult {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => ValidationResult::accept(),
            Err(rejection) => ValidationResult::reject(rejection),
        }
    }
}

/// Registration form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Age,
    Phone,
    Email,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::FullName => write!(f, "full name"),
            Field::Age => write!(f, "age"),
            Field::Phone => write!(f, "phone"),
            Field::Email => write!(f, "email"),
        }
    }
}

/// First failing field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub reason: Rejection,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.reason)
    }
}

impl std::error::Error for FieldError {}
