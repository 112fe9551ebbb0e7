//! Authentication service layer.
//!
//! Local staff credential checks and the two halves of the Google OAuth2 flow: building the
//! login URL and turning the callback code into an authenticated session state.

pub mod callback;
pub mod login;
