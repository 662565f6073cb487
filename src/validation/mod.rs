//! Registration field validation
//!
//! Pure checks for full name, age, phone and email. Nothing here performs I/O
//! or panics; every failure is reported as a [`Rejection`].

pub mod results;
pub mod rules;

pub use results::{Field, FieldError, Rejection, ValidationResult};
pub use rules::{
    normalize_phone, validate_age, validate_email, validate_full_name, validate_phone,
    validate_record,
};
