//! Portfolio site HTTP server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! flash plumbing, view rendering) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod routes;
pub mod state;
pub mod views;
