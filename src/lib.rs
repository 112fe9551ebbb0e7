//! Student records management service.
//!
//! `model` holds the DTOs exchanged over the JSON API, `server` holds everything that
//! runs behind the HTTP listener.

pub mod model;
pub mod server;
