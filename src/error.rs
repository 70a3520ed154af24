//! Error types for the ONTAP configuration modules

use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Module error types
#[derive(Error, Debug)]
pub enum Error {
    /// The remote-access client could not be constructed
    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    /// Malformed or missing module parameter
    #[error("Validation error: {0}")]
    Validation(String),

    /// Argument file could not be read
    #[error("Configuration error: {0}")]
    Config(String),

    /// A remote call failed; `context` names the operation and its target
    #[error("{context}: {source}")]
    RemoteApi {
        context: String,
        #[source]
        source: Box<Error>,
    },

    /// ONTAP returned an error response
    #[error("ONTAP API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Wrap a failed remote call with the operation it was part of
    pub fn remote_api(context: impl Into<String>, source: Error) -> Self {
        Error::RemoteApi {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// True if this error (or the error it wraps) came from the remote API
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::RemoteApi { .. } | Error::Api { .. } | Error::Http(_)
        )
    }
}
