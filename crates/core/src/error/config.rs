use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("no credential source yielded a usable configuration after {attempted} candidate(s)")]
    ResolutionExhausted { attempted: usize },

    #[error("credential source provided no credentials: {reason}")]
    MissingCredentials { reason: String },
}
