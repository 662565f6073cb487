//! Error types
//!
//! Defines the storage error and the top-level error of the registry.
//! Validation failures are not errors; see [`crate::validation::Rejection`].

use std::fmt;
use std::io;
use std::path::PathBuf;

/// User store errors
#[derive(Debug)]
pub enum StoreError {
    ReadFailed(PathBuf, io::Error),
    WriteFailed(PathBuf, io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::ReadFailed(path, e) => {
                write!(f, "Failed to read user store {}: {}", path.display(), e)
            }
            StoreError::WriteFailed(path, e) => {
                write!(f, "Failed to write user store {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::ReadFailed(_, e) | StoreError::WriteFailed(_, e) => Some(e),
        }
    }
}

/// General registry error that encompasses all error types
#[derive(Debug)]
pub enum RegistryError {
    Store(StoreError),
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Store(e) => write!(f, "Storage error: {}", e),
            RegistryError::Config(e) => write!(f, "Configuration error: {}", e),
            RegistryError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<StoreError> for RegistryError {
    fn from(error: StoreError) -> Self {
        RegistryError::Store(error)
    }
}

impl From<config::ConfigError> for RegistryError {
    fn from(error: config::ConfigError) -> Self {
        RegistryError::Config(error)
    }
}

impl From<io::Error> for RegistryError {
    fn from(error: io::Error) -> Self {
        RegistryError::Io(error)
    }
}
