//! Field validation rules
//!
//! Each validator checks one raw form field and stops at the first rule that
//! fails, so the order of the checks decides which reason is reported.

use super::results::{Field, FieldError, Rejection, ValidationResult};
use crate::user::UserRecord;

const PHONE_LENGTH: usize = 12;
const MIN_AGE: i32 = 1;
const MAX_AGE: i32 = 150;

/// Validates a full name: Cyrillic or Latin letters, spaces and hyphens.
pub fn validate_full_name(full_name: &str) -> ValidationResult {
    check_full_name(full_name).into()
}

/// Validates an age given as a decimal string in the range 1..=150.
pub fn validate_age(age: &str) -> ValidationResult {
    check_age(age).into()
}

/// Validates a mobile phone of the form `+79XXXXXXXXX`. Spaces are ignored.
pub fn validate_phone(phone: &str) -> ValidationResult {
    check_phone(phone).into()
}

/// Validates an email address.
pub fn validate_email(email: &str) -> ValidationResult {
    check_email(email).into()
}

/// Removes every space from a phone number
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|&c| c != ' ').collect()
}

/// Validates every field of a record, returning the first failure.
///
/// Fields are checked in form order: full name, age, phone, email.
pub fn validate_record(record: &UserRecord) -> Result<(), FieldError> {
    let checks = [
        (Field::FullName, check_full_name(&record.full_name)),
        (Field::Age, check_age(&record.age)),
        (Field::Phone, check_phone(&record.phone)),
        (Field::Email, check_email(&record.email)),
    ];

    for (field, result) in checks {
        result.map_err(|reason| FieldError { field, reason })?;
    }
    Ok(())
}

fn check_full_name(full_name: &str) -> Result<(), Rejection> {
    if full_name.trim().is_empty() {
        return Err(Rejection::EmptyFullName);
    }
    if !full_name.chars().all(is_name_char) {
        return Err(Rejection::InvalidFullNameChars);
    }
    Ok(())
}

fn check_age(age: &str) -> Result<(), Rejection> {
    if age.trim().is_empty() {
        return Err(Rejection::EmptyAge);
    }
    if !age.chars().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::AgeNotDigits);
    }

    // Digits only, so parsing fails solely on overflow
    let value: i32 = age.parse().map_err(|_| Rejection::AgeUnparseable)?;
    if !(MIN_AGE..=MAX_AGE).contains(&value) {
        return Err(Rejection::AgeOutOfRange);
    }
    Ok(())
}

fn check_phone(phone: &str) -> Result<(), Rejection> {
    if phone.trim().is_empty() {
        return Err(Rejection::EmptyPhone);
    }

    let digits: Vec<char> = normalize_phone(phone).chars().collect();
    if digits.len() != PHONE_LENGTH {
        return Err(Rejection::PhoneWrongLength);
    }
    if digits[0] != '+' {
        return Err(Rejection::PhoneMissingPlus);
    }
    if digits[1] != '7' {
        return Err(Rejection::PhoneWrongCountryCode);
    }
    if digits[2] != '9' {
        return Err(Rejection::PhoneWrongOperatorDigit);
    }
    if !digits[3..].iter().all(|c| c.is_ascii_digit()) {
        return Err(Rejection::PhoneNotDigits);
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), Rejection> {
    if email.trim().is_empty() {
        return Err(Rejection::EmptyEmail);
    }

    let chars: Vec<char> = email.chars().collect();
    if chars.iter().filter(|&&c| c == '@').count() != 1 {
        return Err(Rejection::EmailAtCount);
    }
    let at = chars
        .iter()
        .position(|&c| c == '@')
        .ok_or(Rejection::EmailAtCount)?;
    if at == 0 || at == chars.len() - 1 {
        return Err(Rejection::EmailAtPosition);
    }

    // Only the first dot after @ is positional; later dots pass the char scan
    let dot = chars[at + 1..]
        .iter()
        .position(|&c| c == '.')
        .map(|offset| at + 1 + offset)
        .ok_or(Rejection::EmailMissingDot)?;
    if dot == at + 1 {
        return Err(Rejection::EmailEmptyDomainLabel);
    }
    if dot == chars.len() - 1 {
        return Err(Rejection::EmailEmptyTopLevel);
    }

    if !chars[..at].iter().all(|&c| is_local_char(c)) {
        return Err(Rejection::EmailInvalidLocalChars);
    }
    if !chars[at + 1..].iter().all(|&c| is_domain_char(c) || c == '.') {
        return Err(Rejection::EmailInvalidDomainChars);
    }
    Ok(())
}

fn is_name_char(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё' | 'a'..='z' | 'A'..='Z' | ' ' | '-')
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}
