//! CLI error types.

use thiserror::Error;

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration problem (missing key, unreadable file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The route file could not be read or parsed.
    #[error("Route error: {0}")]
    Route(String),

    /// The map provider could not be set up.
    #[error("Provider error: {0}")]
    Provider(#[from] geofollow::provider::ProviderError),

    /// The async runtime could not be created.
    #[error("Failed to create Tokio runtime: {0}")]
    Runtime(std::io::Error),
}

impl From<geofollow::config::ConfigError> for CliError {
    fn from(e: geofollow::config::ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}
