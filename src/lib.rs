//! User registry
//!
//! Validates registration fields (full name, age, phone, email) and stores
//! accepted users in a pipe-delimited text file.

pub mod commands;
pub mod config;
pub mod error;
pub mod registration;
pub mod store;
pub mod user;
pub mod validation;

pub use crate::config::RegistryConfig;
pub use error::{RegistryError, StoreError};
pub use registration::{RegistrationOutcome, Registrar};
pub use store::UserStore;
pub use user::UserRecord;
