//! # way-assets
//!
//! Asset stores for Wayfinder route photos.
//!
//! Every store answers two questions about a logical [`AssetPath`]:
//! - [`AssetStore::probe`]: does the photo exist? Used by route discovery.
//! - [`AssetStore::fetch`]: load it fully. Used to display a step and to
//!   warm caches ahead of the cursor.
//!
//! Implementations:
//! - [`HttpAssetStore`]: a static HTTP host (`HEAD`, falling back to `GET`)
//! - [`DirAssetStore`]: a local directory
//! - [`MemoryAssetStore`]: an in-memory set, handy for demos and tests
//!
//! [`AnyAssetStore`] picks one from [`way_config::AssetsConfig`].

mod dir;
mod error;
mod http;
mod memory;

pub use dir::DirAssetStore;
pub use error::AssetError;
pub use http::HttpAssetStore;
pub use memory::MemoryAssetStore;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use way_config::AssetsConfig;
use way_core::AssetPath;

// ── Trait ──────────────────────────────────────────────────────────

/// A place route photos can be probed and loaded from.
pub trait AssetStore: Send + Sync + 'static {
    /// Check whether the asset exists.
    ///
    /// `Ok(false)` means "absent". Errors describe transport or environment
    /// failures; callers that only need a boolean treat them as absent.
    fn probe(&self, path: &AssetPath) -> impl Future<Output = Result<bool, AssetError>> + Send;

    /// Load the asset and return its size in bytes.
    fn fetch(&self, path: &AssetPath) -> impl Future<Output = Result<u64, AssetError>> + Send;

    /// Human-readable location (URL or filesystem path) of the asset.
    fn location(&self, path: &AssetPath) -> String;
}

impl<S: AssetStore> AssetStore for Arc<S> {
    fn probe(&self, path: &AssetPath) -> impl Future<Output = Result<bool, AssetError>> + Send {
        (**self).probe(path)
    }

    fn fetch(&self, path: &AssetPath) -> impl Future<Output = Result<u64, AssetError>> + Send {
        (**self).fetch(path)
    }

    fn location(&self, path: &AssetPath) -> String {
        (**self).location(path)
    }
}

// ── Config selection ───────────────────────────────────────────────

/// Store selected from configuration.
#[derive(Debug, Clone)]
pub enum AnyAssetStore {
    Http(HttpAssetStore),
    Dir(DirAssetStore),
}

impl AnyAssetStore {
    /// Build the configured store. A local `root_dir` wins over `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::NotConfigured`] when neither source is set, or
    /// [`AssetError::InvalidUrl`] / [`AssetError::Http`] if the HTTP client
    /// cannot be built.
    pub fn from_config(config: &AssetsConfig) -> Result<Self, AssetError> {
        if config.has_local_dir() {
            tracing::debug!(root = %config.root_dir, "using local asset directory");
            return Ok(Self::Dir(DirAssetStore::new(&config.root_dir)));
        }
        if config.has_http_host() {
            tracing::debug!(base_url = %config.base_url, "using HTTP asset host");
            let store =
                HttpAssetStore::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
            return Ok(Self::Http(store));
        }
        Err(AssetError::NotConfigured)
    }
}

impl AssetStore for AnyAssetStore {
    async fn probe(&self, path: &AssetPath) -> Result<bool, AssetError> {
        match self {
            Self::Http(store) => store.probe(path).await,
            Self::Dir(store) => store.probe(path).await,
        }
    }

    async fn fetch(&self, path: &AssetPath) -> Result<u64, AssetError> {
        match self {
            Self::Http(store) => store.fetch(path).await,
            Self::Dir(store) => store.fetch(path).await,
        }
    }

    fn location(&self, path: &AssetPath) -> String {
        match self {
            Self::Http(store) => store.location(path),
            Self::Dir(store) => store.location(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_store_is_an_error() {
        let err = AnyAssetStore::from_config(&AssetsConfig::default()).unwrap_err();
        assert!(matches!(err, AssetError::NotConfigured));
    }

    #[test]
    fn local_dir_wins_over_http_host() {
        let config = AssetsConfig {
            base_url: "http://localhost:5173/".into(),
            root_dir: "./public".into(),
            ..Default::default()
        };
        let store = AnyAssetStore::from_config(&config).unwrap();
        assert!(matches!(store, AnyAssetStore::Dir(_)));
    }

    #[test]
    fn http_host_selected_when_no_dir() {
        let config = AssetsConfig {
            base_url: "http://localhost:5173".into(),
            ..Default::default()
        };
        let store = AnyAssetStore::from_config(&config).unwrap();
        assert!(matches!(store, AnyAssetStore::Http(_)));
    }
}
