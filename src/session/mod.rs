//! Login session persistence.
//!
//! The logged-in [`User`] is stored as JSON under a single fixed key in a
//! small key-value store. [`FileStore`] keeps the store as one JSON object on
//! disk; [`MemoryStore`] backs tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use civiclens_core::{User, authenticate};

use crate::error::{CliError, Result};

/// Key under which the session user is stored.
pub const SESSION_KEY: &str = "civiclens-user";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Entries to rewrite. A file that no longer parses is replaced.
    fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool)> {
        match self.read_all() {
            Ok(entries) => Ok((entries, false)),
            Err(CliError::Json(err)) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "session file is not valid JSON; starting a fresh store"
                );
                Ok((BTreeMap::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.read_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let (mut entries, reset) = self.read_for_write()?;
        if entries.remove(key).is_some() || reset {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// The current login state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
}

impl Session {
    /// Restore the session from `store`.
    ///
    /// An unreadable or malformed entry is logged and treated as logged out.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!(error = %err, "session store unreadable; treating as logged out");
                return Self::default();
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                debug!(email = %user.email, "restored session");
                Self { user: Some(user) }
            }
            Err(err) => {
                warn!(error = %err, "corrupt session entry; treating as logged out");
                Self::default()
            }
        }
    }

    /// Persist the session to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        match &self.user {
            Some(user) => store.set(SESSION_KEY, &serde_json::to_string(user)?),
            None => store.remove(SESSION_KEY),
        }
    }

    /// Authenticate and record the user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` when no account matches.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User> {
        let user = authenticate(email, password).ok_or(CliError::InvalidCredentials)?;
        Ok(&*self.user.insert(user))
    }

    /// Clear the user. Returns whether anyone was logged in.
    pub fn logout(&mut self) -> bool {
        self.user.take().is_some()
    }

    /// The logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `NotLoggedIn` when the session is empty.
    pub fn require_user(&self) -> Result<&User> {
        self.user.as_ref().ok_or(CliError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civiclens_core::Role;

    #[test]
    fn test_login_roundtrip_through_store() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        session.login("admin@civiclens.com", "admin123").unwrap();
        session.save(&mut store).unwrap();

        let restored = Session::load(&store);
        let user = restored.require_user().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email, "admin@civiclens.com");
    }

    #[test]
    fn test_bad_credentials() {
        let mut session = Session::default();
        let err = session.login("admin@civiclens.com", "nope").unwrap_err();
        assert!(matches!(err, CliError::InvalidCredentials));
        assert!(session.user.is_none());
    }

    #[test]
    fn test_logout_removes_key() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        session.login("dept@civiclens.com", "dept123").unwrap();
        session.save(&mut store).unwrap();

        assert!(session.logout());
        assert!(!session.logout());
        session.save(&mut store).unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_entry_is_logged_out() {
        crate::logging::init_test_logging();
        let mut store = MemoryStore::default();
        store.set(SESSION_KEY, "{not json").unwrap();
        let session = Session::load(&store);
        assert!(matches!(session.require_user(), Err(CliError::NotLoggedIn)));
    }

    #[test]
    fn test_file_store_persists_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let mut store = FileStore::new(&path);
        store.set("theme", "dark").unwrap();

        let mut session = Session::default();
        session.login("dept@civiclens.com", "dept123").unwrap();
        session.save(&mut store).unwrap();
        session.logout();
        session.save(&mut store).unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_recovers_from_unparseable_file() {
        crate::logging::init_test_logging();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let mut store = FileStore::new(&path);

        let mut session = Session::load(&store);
        assert!(session.user.is_none());
        session.login("admin@civiclens.com", "admin123").unwrap();
        session.save(&mut store).unwrap();
        assert!(Session::load(&store).require_user().is_ok());

        fs::write(&path, "{not json").unwrap();
        Session::default().save(&mut store).unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
        assert_eq!(Session::load(&store), Session::default());
    }
}
