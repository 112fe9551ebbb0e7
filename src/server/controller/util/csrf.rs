use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Validate that the session CSRF state exists and matches `state`.
///
/// The stored state is removed either way, so a callback URL can't be replayed.
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::take(session).await?;

    if stored_state == csrf_state {
        return Ok(());
    }

    Err(Error::AuthError(AuthError::CsrfValidationFailed))
}
