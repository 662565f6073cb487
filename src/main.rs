//! User Registry - Entry Point
//!
//! Interactive console for registering users into the flat-file store.

use log::info;
use std::io;
use std::process::ExitCode;

use user_registry::commands::run_session;
use user_registry::error::handlers::{error_to_exit_code, handle_error};
use user_registry::{RegistryConfig, RegistryError, Registrar, UserStore};

fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e) as u8)
        }
    }
}

fn run() -> Result<(), RegistryError> {
    let config = RegistryConfig::load()?;
    info!("Using user store {}", config.store_path);

    let registrar = Registrar::new(UserStore::from_config(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&registrar, &config.prompt, &mut stdin.lock(), &mut stdout.lock())
}
