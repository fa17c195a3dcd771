//! Error types for outbound command encoding.

use thiserror::Error;

/// Errors produced while encoding a command into its wire frame
#[derive(Debug, Clone, Error)]
pub enum EncodingError {
    /// Command needs a channel resolver but none was attached
    #[error("No channel resolver attached; attach one before encoding")]
    ResolverNotAttached,

    /// Resolver has no channel id for the symbol (not currently subscribed)
    #[error("No channel registered for symbol: {0}")]
    UnknownChannel(String),

    /// JSON serialization failure
    #[error("Failed to serialize command: {0}")]
    Serialization(String),

    /// Client configuration cannot support this command
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Errors in the client configuration itself
#[derive(Debug, Clone, Error)]
pub enum ConfigurationError {
    /// An authenticated command was encoded without API credentials
    #[error("Missing API credentials: {0}")]
    MissingCredentials(&'static str),
}

impl From<serde_json::Error> for EncodingError {
    fn from(err: serde_json::Error) -> Self {
        EncodingError::Serialization(err.to_string())
    }
}

/// Result type alias for encoding operations
pub type EncodeResult<T> = Result<T, EncodingError>;
