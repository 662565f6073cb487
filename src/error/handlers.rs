//! Error handlers
//!
//! Reports fatal errors and maps them to process exit codes.

use crate::error::types::RegistryError;
use log::error;

/// Log a registry error
pub fn handle_error(err: &RegistryError) {
    error!("User registry error: {}", err);
}

/// Convert error to a sysexits-style exit code
pub fn error_to_exit_code(err: &RegistryError) -> i32 {
    match err {
        RegistryError::Config(_) => 78,
        RegistryError::Store(_) => 74,
        RegistryError::Io(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let store = RegistryError::from(StoreError::ReadFailed(
            PathBuf::from("users.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(error_to_exit_code(&store), 74);

        let config = RegistryError::from(config::ConfigError::Message("bad".into()));
        assert_eq!(error_to_exit_code(&config), 78);

        let io_err = RegistryError::from(io::Error::other("closed"));
        assert_eq!(error_to_exit_code(&io_err), 1);
    }

    #[test]
    fn test_store_error_display_names_path() {
        let err = StoreError::WriteFailed(
            PathBuf::from("/tmp/users.txt"),
            io::Error::new(io::ErrorKind::Other, "disk full"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/users.txt"));
        assert!(message.contains("disk full"));
    }
}
