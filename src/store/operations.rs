//! Store operations
//!
//! Append-only user log backed by a single text file. A missing file is an
//! empty store; every call opens and closes the file.

use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::RegistryConfig;
use crate::error::StoreError;
use crate::store::format::{format_record, line_matches, parse_record};
use crate::user::UserRecord;

/// File-backed user store
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if any stored user shares the full name, phone or email.
    ///
    /// Comparison ignores case. Matching a single field is enough.
    pub fn exists(&self, full_name: &str, phone: &str, email: &str) -> Result<bool, StoreError> {
        let contents = match self.read_contents()? {
            Some(contents) => contents,
            None => return Ok(false),
        };

        let found = contents
            .lines()
            .any(|line| line_matches(line, full_name, phone, email));

        debug!(
            "Duplicate check in {} for {} / {} / {}: {}",
            self.path.display(),
            full_name,
            phone,
            email,
            found
        );
        Ok(found)
    }

    /// Appends a record. Performs no validation and no deduplication.
    pub fn save(&self, record: &UserRecord) -> Result<(), StoreError> {
        let line = format_record(record);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::WriteFailed(self.path.clone(), e))?;
        writeln!(file, "{}", line).map_err(|e| StoreError::WriteFailed(self.path.clone(), e))?;

        info!("Saved user {} to {}", record.full_name, self.path.display());
        Ok(())
    }

    /// Lists every stored record. Lines with fewer than four fields are skipped.
    pub fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        let records: Vec<UserRecord> = match self.read_contents()? {
            Some(contents) => contents.lines().filter_map(parse_record).collect(),
            None => Vec::new(),
        };

        debug!("Listed {} users from {}", records.len(), self.path.display());
        Ok(records)
    }

    // Invalid UTF-8 is replaced so a corrupt line cannot hide the others
    fn read_contents(&self) -> Result<Option<String>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("User store {} does not exist yet", self.path.display());
                Ok(None)
            }
            Err(e) => Err(StoreError::ReadFailed(self.path.clone(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.txt"));
        (dir, store)
    }

    fn ivan() -> UserRecord {
        UserRecord::new("Иван Петров", "30", "+79991234567", "ivan@mail.ru")
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let (_dir, store) = temp_store();
        assert!(!store.exists("Иван Петров", "+79991234567", "ivan@mail.ru").unwrap());
        assert!(store.list_all().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_list() {
        let (_dir, store) = temp_store();
        store.save(&ivan()).unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records, vec![ivan()]);
        assert_eq!(
            records[0].fields(),
            ["Иван Петров", "+79991234567", "ivan@mail.ru", "30"]
        );

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "Иван Петров|+79991234567|ivan@mail.ru|30\n");
    }

    #[test]
    fn test_save_appends_without_dedup() {
        let (_dir, store) = temp_store();
        store.save(&ivan()).unwrap();
        store.save(&ivan()).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_exists_matches_any_single_field() {
        let (_dir, store) = temp_store();
        store.save(&ivan()).unwrap();

        assert!(store.exists("ИВАН ПЕТРОВ", "+79990000000", "other@mail.ru").unwrap());
        assert!(store.exists("Anna", "+79991234567", "anna@mail.ru").unwrap());
        assert!(store.exists("Anna", "+79990000000", "IVAN@MAIL.RU").unwrap());
        assert!(!store.exists("Anna", "+79990000000", "anna@mail.ru").unwrap());
    }

    #[test]
    fn test_list_skips_malformed_lines() {
        let (_dir, store) = temp_store();
        fs::write(
            store.path(),
            "broken line\nA|+79991111111|a@b.co|20\n\nB|+79992222222\n",
        )
        .unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "A");
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), b"A|+79991111111|a@b.co|20\n\xff\xfe|junk\n").unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "a@b.co");
        assert!(store.exists("x", "y", "A@B.CO").unwrap());

        store.save(&ivan()).unwrap();
        assert_eq!(store.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_list_is_repeatable() {
        let (_dir, store) = temp_store();
        store.save(&ivan()).unwrap();
        store
            .save(&UserRecord::new("Anna", "25", "+79990000000", "anna@mail.ru"))
            .unwrap();
        assert_eq!(store.list_all().unwrap(), store.list_all().unwrap());
    }

    #[test]
    fn test_read_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as the store file
        let store = UserStore::new(dir.path());
        assert!(matches!(
            store.list_all(),
            Err(StoreError::ReadFailed(_, _))
        ));
    }
}
