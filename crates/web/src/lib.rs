//! Scribble web server library.
//!
//! Exposes the building blocks (config, state, error handling, the generic
//! resource controller, routes, views) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod forms;
pub mod resource;
pub mod resources;
pub mod routes;
pub mod state;
pub mod views;
