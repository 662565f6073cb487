//! Registration result types

use std::fmt;

use crate::user::UserRecord;
use crate::validation::FieldError;

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The record was appended to the store
    Registered(UserRecord),
    /// A field failed validation; nothing was stored
    Rejected(FieldError),
    /// A stored user already has this full name, phone or email
    Duplicate,
}

impl RegistrationOutcome {
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered(_))
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationOutcome::Registered(record) => {
                write!(f, "User {} registered", record.full_name)
            }
            RegistrationOutcome::Rejected(err) => write!(f, "{}", err),
            RegistrationOutcome::Duplicate => write!(
                f,
                "A user with this full name, phone or email already exists"
            ),
        }
    }
}
