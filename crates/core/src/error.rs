/// Domain-level error type.
///
/// The `Display` output of each variant is the exact message clients see in
/// the JSON `error` field, so wording here is part of the API contract
/// (`"Todo not found"`, `"Title is required"`).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
