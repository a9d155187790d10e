//! Entity structs (database rows) and request DTOs.

pub mod todo;
