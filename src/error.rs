use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building or loading recipes.
///
/// All variants are programmer or configuration errors. Nothing here is
/// retried; the caller gets the error straight back.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BuildError {
    #[error("operation '{operation}' is not implemented by this builder")]
    NotImplemented { operation: String },

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("invalid part: {0}")]
    InvalidPart(String),

    #[error("invalid recipe configuration: {0}")]
    Config(String),

    #[error("failed to read recipe file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        Self::NotImplemented {
            operation: operation.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn no_builder() -> Self {
        Self::InvalidState("a builder must be set before calling recipe methods".to_string())
    }
}

impl From<toml::de::Error> for BuildError {
    fn from(err: toml::de::Error) -> Self {
        BuildError::Config(err.to_string())
    }
}
