//! Asset store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while probing or fetching a route photo.
#[derive(Debug, Error)]
pub enum AssetError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The asset host answered with a status that is neither success nor "gone".
    #[error("asset host returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The base URL or a joined asset URL could not be parsed.
    #[error("invalid asset URL: {0}")]
    InvalidUrl(String),

    /// Filesystem error from a local asset directory.
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The logical path would resolve outside the asset root.
    #[error("refusing asset path outside the asset root: {0}")]
    OutsideRoot(String),

    /// Simulated or otherwise non-specific store failure.
    #[error("asset store unavailable: {0}")]
    Unavailable(String),

    /// Neither an HTTP host nor a local directory is configured.
    #[error("no asset store configured; set assets.base_url or assets.root_dir")]
    NotConfigured,
}
