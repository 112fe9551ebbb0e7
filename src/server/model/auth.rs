use serde::Deserialize;

/// The static staff credential accepted by the local login form
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Login URL and CSRF state for a Google login attempt
pub struct GoogleLogin {
    pub login_url: String,
    pub state: String,
}

/// Profile returned by the Google userinfo endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct GoogleProfile {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
