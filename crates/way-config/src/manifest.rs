//! Category manifest location.

use serde::{Deserialize, Serialize};

fn default_source() -> String {
    "structure.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManifestConfig {
    /// File path or `http(s)://` URL of the category manifest.
    #[serde(default = "default_source")]
    pub source: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
        }
    }
}

impl ManifestConfig {
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}
