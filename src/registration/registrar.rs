//! Registration flow
//!
//! Validate every field, reject duplicates, then append to the store.

use log::{info, warn};

use crate::error::StoreError;
use crate::registration::results::RegistrationOutcome;
use crate::store::UserStore;
use crate::user::UserRecord;
use crate::validation::{normalize_phone, validate_record};

/// Registers users into a [`UserStore`]
#[derive(Debug, Clone)]
pub struct Registrar {
    store: UserStore,
}

impl Registrar {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Registers the submitted form.
    ///
    /// The phone is stored with spaces stripped. Store failures propagate;
    /// validation failures and duplicates are outcomes.
    pub fn register(&self, form: &UserRecord) -> Result<RegistrationOutcome, StoreError> {
        if let Err(err) = validate_record(form) {
            warn!("Rejected registration for {:?}: {}", form.full_name, err);
            return Ok(RegistrationOutcome::Rejected(err));
        }

        let record = UserRecord {
            phone: normalize_phone(&form.phone),
            ..form.clone()
        };

        if self
            .store
            .exists(&record.full_name, &record.phone, &record.email)?
        {
            info!("Duplicate registration for {}", record.full_name);
            return Ok(RegistrationOutcome::Duplicate);
        }

        self.store.save(&record)?;
        Ok(RegistrationOutcome::Registered(record))
    }

    /// All stored users
    pub fn users(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.store.list_all()
    }
}
