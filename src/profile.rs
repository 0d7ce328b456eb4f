//! The user profile model and its endpoints.
//!
//! The profile is a single record captured during onboarding. It has no
//! history: saving overwrites the whole document.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{app_state::ProfileState, stores::ProfileStore};

/// The ledger owner's details, captured once during onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The owner's display name, used to sign reminder emails.
    pub name: String,
    /// The owner's email address.
    pub email: String,
    /// The currency symbol shown next to amounts, e.g. `€`.
    pub currency: String,
}

/// A route handler that returns the stored profile.
///
/// Responds with JSON `null` when onboarding has not happened yet, so
/// clients can tell "no profile" apart from a failure.
pub async fn get_profile_endpoint<P>(State(state): State<ProfileState<P>>) -> impl IntoResponse
where
    P: ProfileStore + Clone + Send + Sync,
{
    match state.profile_store.get() {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => {
            tracing::error!("Could not fetch the user profile: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch user" })),
            )
                .into_response()
        }
    }
}

/// A route handler that saves the profile, overwriting any previous one.
pub async fn save_profile_endpoint<P>(
    State(state): State<ProfileState<P>>,
    Json(profile): Json<UserProfile>,
) -> impl IntoResponse
where
    P: ProfileStore + Clone + Send + Sync,
{
    let mut store = state.profile_store;

    match store.save(profile) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(error) => {
            tracing::error!("Could not save the user profile: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to save user" })),
            )
                .into_response()
        }
    }
}
