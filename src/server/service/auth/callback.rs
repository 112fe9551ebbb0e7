use crate::server::{
    error::{auth::AuthError, Error},
    model::{auth::GoogleProfile, session::user::AuthState},
    util::google::GoogleClient,
};

/// Exchanges the callback code for the user's Google profile and derives the session state
///
/// # Returns
/// - `Ok(AuthState::FederatedAuthenticated)` - Principal is the display name, else the email
/// - `Err(Error::OAuth2TokenError)` - Code exchange rejected by the provider
/// - `Err(Error::HttpError)` - Profile request failed
/// - `Err(Error::AuthError(AuthError::ProfileMissingPrincipal))` - Profile has no name or email
pub async fn callback_service(google: &GoogleClient, code: &str) -> Result<AuthState, Error> {
    let profile = google.fetch_profile(code).await?;

    federated_state(profile)
}

fn federated_state(profile: GoogleProfile) -> Result<AuthState, Error> {
    let display_name = profile
        .name
        .filter(|name| !name.trim().is_empty())
        .or(profile.email.filter(|email| !email.trim().is_empty()))
        .ok_or(AuthError::ProfileMissingPrincipal)?;

    Ok(AuthState::FederatedAuthenticated { display_name })
}
