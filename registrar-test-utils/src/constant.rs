//! Placeholder credentials used across tests. None of these are real.

/// Static staff credential accepted by the local login in tests
pub static TEST_ADMIN_USERNAME: &str = "admin";
pub static TEST_ADMIN_PASSWORD: &str = "admin_password";

/// Mock Google OAuth2 client ID
pub static TEST_GOOGLE_CLIENT_ID: &str = "google_client_id";

/// Mock Google OAuth2 client secret
pub static TEST_GOOGLE_CLIENT_SECRET: &str = "google_client_secret";

/// Callback URL registered for the mock Google client
pub static TEST_GOOGLE_CALLBACK_URL: &str = "http://localhost:3000/auth/google/callback";

/// Access token returned by the mock token endpoint
pub static TEST_GOOGLE_ACCESS_TOKEN: &str = "mock_access_token";
