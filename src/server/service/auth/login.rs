use sha2::{Digest, Sha256};

use crate::server::{
    error::{auth::AuthError, Error},
    model::{
        auth::{AdminCredentials, GoogleLogin},
        session::user::AuthState,
    },
    util::google::GoogleClient,
};

/// Builds the Google login URL along with the CSRF state to keep in the session
pub fn login_service(google: &GoogleClient) -> GoogleLogin {
    google.login_url()
}

/// Checks a local login form submission against the static staff credential
///
/// # Returns
/// - `Ok(AuthState::LocalAuthenticated)` - Username and password match
/// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Either one does not match
pub fn local_login_service(
    admin: &AdminCredentials,
    username: &str,
    password: &str,
) -> Result<AuthState, Error> {
    let username_matches = constant_time_eq(username.as_bytes(), admin.username.as_bytes());
    let password_matches = constant_time_eq(password.as_bytes(), admin.password.as_bytes());

    if username_matches && password_matches {
        Ok(AuthState::LocalAuthenticated {
            username: admin.username.clone(),
        })
    } else {
        Err(AuthError::InvalidCredentials.into())
    }
}

// Compares fixed-width digests; the work done is the same for inputs of any length.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let a = Sha256::digest(a);
    let b = Sha256::digest(b);

    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
