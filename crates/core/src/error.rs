/// Domain error shared by the store, the services, and the HTTP layer.
///
/// The HTTP layer maps each variant to a status code; nothing here knows
/// about HTTP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The addressed row does not exist. `key` is the id or headword that
    /// was looked up.
    #[error("Entity not found: {entity} with key {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique constraint would be violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad credentials, or no valid session on a protected route.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a not-found error keyed by anything displayable.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
