//! Asset host configuration.

use serde::{Deserialize, Serialize};
use way_core::AssetLayout;
use way_core::layout::{DEFAULT_EXTENSION, DEFAULT_ROOT};

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Base URL of the HTTP host serving route photos (e.g., `https://guide.example.org/`).
    #[serde(default)]
    pub base_url: String,

    /// Local directory holding route photos. Takes precedence over `base_url`.
    #[serde(default)]
    pub root_dir: String,

    /// Root segment of every photo path.
    #[serde(default = "default_root")]
    pub root: String,

    /// Photo file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Per-request timeout for the HTTP host, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            root_dir: String::new(),
            root: default_root(),
            extension: default_extension(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AssetsConfig {
    /// Check if either an HTTP host or a local directory is set.
    pub fn is_configured(&self) -> bool {
        self.has_http_host() || self.has_local_dir()
    }

    pub fn has_http_host(&self) -> bool {
        !self.base_url.is_empty()
    }

    pub fn has_local_dir(&self) -> bool {
        !self.root_dir.is_empty()
    }

    /// Path layout derived from `root` and `extension`.
    pub fn layout(&self) -> AssetLayout {
        AssetLayout::new(&self.root, &self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = AssetsConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.root, "photos-navigation");
        assert_eq!(config.extension, "png");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn configured_with_either_source() {
        let http = AssetsConfig {
            base_url: "http://localhost:5173/".into(),
            ..Default::default()
        };
        assert!(http.is_configured());
        assert!(!http.has_local_dir());

        let dir = AssetsConfig {
            root_dir: "./public".into(),
            ..Default::default()
        };
        assert!(dir.is_configured());
        assert!(!dir.has_http_host());
    }

    #[test]
    fn layout_uses_configured_segments() {
        let config = AssetsConfig {
            root: "routes".into(),
            extension: "jpg".into(),
            ..Default::default()
        };
        let dest = way_core::Destination::new("B2").unwrap();
        assert_eq!(config.layout().step_path(&dest, 1).as_str(), "routes/B2/1.jpg");
    }
}
