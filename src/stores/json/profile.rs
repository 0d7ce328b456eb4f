//! Implements a flat-file JSON backed user profile store.

use std::{fs, path::PathBuf};

use crate::{Error, profile::UserProfile, stores::ProfileStore};

/// Stores the user profile as a single JSON object on local disk.
///
/// There is exactly one profile; saving overwrites the whole document.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    /// Create a store that persists the profile at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStore for JsonProfileStore {
    fn get(&self) -> Result<Option<UserProfile>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path)?;

        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&mut self, profile: UserProfile) -> Result<UserProfile, Error> {
        let text = serde_json::to_string_pretty(&profile)?;
        fs::write(&self.path, text)?;

        Ok(profile)
    }
}
