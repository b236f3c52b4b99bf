use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("credential validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("caller identity response missing {field}")]
    IncompleteIdentity { field: String },
}
