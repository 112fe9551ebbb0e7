//! Data transfer objects shared by the JSON API and the rendered pages.

pub mod api;
pub mod student;
