//! OAuth2 CSRF state kept in the session between the Google redirect and its callback.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_CSRF_KEY: &str = "registrar:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state generated for a new Google login attempt.
    ///
    /// A second login attempt overwrites the state of the first one.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Removes and returns the stored CSRF state so it can only be validated once.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored state
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login attempt is pending
    pub async fn take(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
