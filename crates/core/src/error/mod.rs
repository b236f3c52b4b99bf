mod auth;
mod config;
mod lookup;

pub use auth::AuthenticationError;
pub use config::ConfigurationError;
pub use lookup::{LookupError, NotFoundError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub type Result<T> = std::result::Result<T, Error>;
