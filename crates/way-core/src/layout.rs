//! Asset naming for route photos.
//!
//! Step `N` of destination `D` lives at the logical path
//! `photos-navigation/<D>/<N>.png`. `N` starts at 1 and is never zero-padded.
//! Stores resolve the logical path against their own base (URL or directory).

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::destination::Destination;

/// Default root segment of every route photo path.
pub const DEFAULT_ROOT: &str = "photos-navigation";

/// Default photo file extension.
pub const DEFAULT_EXTENSION: &str = "png";

/// Logical, store-relative location of one asset (always `/`-separated).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How step indices map onto asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    root: String,
    extension: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT, DEFAULT_EXTENSION)
    }
}

impl AssetLayout {
    #[must_use]
    pub fn new(root: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into().trim_matches('/').to_string(),
            extension: extension.into().trim_start_matches('.').to_string(),
        }
    }

    /// Logical path of step `index` (1-based) for `destination`.
    #[must_use]
    pub fn step_path(&self, destination: &Destination, index: u32) -> AssetPath {
        let file = format!("{index}.{}", self.extension);
        if self.root.is_empty() {
            AssetPath(format!("{destination}/{file}"))
        } else {
            AssetPath(format!("{}/{destination}/{file}", self.root))
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(id: &str) -> Destination {
        Destination::new(id).unwrap()
    }

    #[test]
    fn default_layout_is_bit_exact() {
        let layout = AssetLayout::default();
        assert_eq!(
            layout.step_path(&dest("Lab-3"), 1).as_str(),
            "photos-navigation/Lab-3/1.png"
        );
        assert_eq!(
            layout.step_path(&dest("Lab-3"), 12).as_str(),
            "photos-navigation/Lab-3/12.png"
        );
    }

    #[test]
    fn identifier_is_not_escaped() {
        let layout = AssetLayout::default();
        assert_eq!(
            layout.step_path(&dest("Amphi É 2"), 3).as_str(),
            "photos-navigation/Amphi É 2/3.png"
        );
    }

    #[test]
    fn custom_root_and_extension_are_normalised() {
        let layout = AssetLayout::new("/routes/", ".jpg");
        assert_eq!(layout.root(), "routes");
        assert_eq!(layout.step_path(&dest("B2"), 4).as_str(), "routes/B2/4.jpg");
    }

    #[test]
    fn empty_root_drops_the_prefix() {
        let layout = AssetLayout::new("", "png");
        assert_eq!(layout.step_path(&dest("B2"), 1).as_str(), "B2/1.png");
    }
}
