//! User registration
//!
//! Composes validation, duplicate detection and storage.

pub mod registrar;
pub mod results;

pub use registrar::Registrar;
pub use results::RegistrationOutcome;
