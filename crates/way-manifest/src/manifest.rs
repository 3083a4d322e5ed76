use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use way_core::Destination;

use crate::category::{CategoryKind, category_title};
use crate::error::ManifestError;
use crate::source::ManifestSource;

/// `category -> label -> resource path`, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryManifest(IndexMap<String, IndexMap<String, String>>);

/// One navigable place listed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryEntry {
    pub label: String,
    pub resource_path: String,
    pub destination: Destination,
}

/// Listing row for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub title: String,
    pub kind: CategoryKind,
    pub count: usize,
}

impl CategoryManifest {
    /// Parse a manifest document.
    ///
    /// # Errors
    ///
    /// [`ManifestError::Parse`] when the document is not a two-level object
    /// of strings.
    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse the manifest at `source`.
    ///
    /// # Errors
    ///
    /// Any read error from [`ManifestSource::read`], or
    /// [`ManifestError::Parse`].
    pub async fn load(source: &ManifestSource) -> Result<Self, ManifestError> {
        let raw = source.read().await?;
        let manifest = Self::from_json(&raw)?;
        tracing::debug!(%source, categories = manifest.0.len(), "manifest loaded");
        Ok(manifest)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Title, kind and entry count of every category.
    #[must_use]
    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.0
            .iter()
            .map(|(key, places)| CategorySummary {
                key: key.clone(),
                title: category_title(key).to_string(),
                kind: CategoryKind::classify(key),
                count: places.len(),
            })
            .collect()
    }

    /// Entries of `category` whose path names a destination. Unknown
    /// categories yield nothing.
    #[must_use]
    pub fn entries(&self, category: &str) -> Vec<CategoryEntry> {
        self.0
            .get(category)
            .into_iter()
            .flatten()
            .filter_map(|(label, path)| entry(category, label, path))
            .collect()
    }

    /// Find a display label in any category.
    #[must_use]
    pub fn find_label(&self, label: &str) -> Option<(&str, CategoryEntry)> {
        self.0.iter().find_map(|(category, places)| {
            let path = places.get(label)?;
            entry(category, label, path).map(|e| (category.as_str(), e))
        })
    }
}

fn entry(category: &str, label: &str, path: &str) -> Option<CategoryEntry> {
    let destination = path
        .split('/')
        .rev()
        .find(|segment| !segment.trim().is_empty())
        .and_then(|segment| Destination::new(segment).ok());

    let Some(destination) = destination else {
        tracing::warn!(category, label, path, "manifest entry has no destination, skipping");
        return None;
    };
    Some(CategoryEntry {
        label: label.to_string(),
        resource_path: path.to_string(),
        destination,
    })
}
