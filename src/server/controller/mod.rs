//! HTTP handlers.
//!
//! `student` and `auth` serve the server-rendered pages, `api` serves the JSON API documented
//! with utoipa. Handlers stay thin: they extract the request, call a service and turn the
//! outcome into a page, a redirect or JSON.

pub mod api;
pub mod auth;
pub mod student;
pub mod util;
