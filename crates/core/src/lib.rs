//! Shared domain types and errors for the todo service.

pub mod error;
pub mod types;
