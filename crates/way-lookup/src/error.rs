//! Lookup error types.

use thiserror::Error;

/// Errors that can occur while resolving an identity key.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The key was empty after trimming.
    #[error("lookup key is empty")]
    EmptyKey,

    /// Service URL or API key is missing.
    #[error("lookup service is not configured (set lookup.url and lookup.api_key)")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The service answered with an empty result set.
    #[error("no record found for '{key}'")]
    NotFound { key: String },
}
