/// Domain-level errors shared by the repository and web layers.
///
/// Persistence failures are not wrapped here; they travel as `sqlx::Error`
/// and are classified at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by identifier found nothing. The id is kept as the raw
    /// route string so non-numeric ids surface the same way as absent rows.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A required form field group (or a field inside one) was not
    /// submitted. Never skipped silently.
    #[error("missing parameter: {name}")]
    MissingParameter { name: String },

    /// An internal error with a human-readable message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn missing_parameter(name: impl Into<String>) -> Self {
        CoreError::MissingParameter { name: name.into() }
    }
}
