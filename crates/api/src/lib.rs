//! Todo API server library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! routes) so integration tests and the binary entrypoint can both build
//! the exact same application.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
