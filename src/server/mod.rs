//! Server side of the student records application.
//!
//! Handlers in [`controller`] call into [`service`], which owns the search and validation
//! rules and reaches the database through [`data`]. Pages are rendered by [`view`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod view;
