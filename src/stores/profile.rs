//! Defines the user profile store trait.

use crate::{Error, profile::UserProfile};

/// Handles the single-record user profile document.
pub trait ProfileStore {
    /// Retrieve the stored profile, or `None` if onboarding has not
    /// happened yet.
    fn get(&self) -> Result<Option<UserProfile>, Error>;

    /// Overwrite the profile document wholesale and return the stored
    /// profile.
    fn save(&mut self, profile: UserProfile) -> Result<UserProfile, Error>;
}
