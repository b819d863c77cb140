/// Errors raised by the core services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The addressed record or session does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Submitted form data violates a field's constraints.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
