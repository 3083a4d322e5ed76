use std::fmt;

use serde::{Deserialize, Serialize};

/// Display title for a category key. Unknown keys are shown as-is.
#[must_use]
pub fn category_title(key: &str) -> &str {
    match key {
        "espaces_pedagogiques" => "Espaces Pédagogiques",
        "departements" => "Départements",
        "laboratoires_et_ateliers" => "Laboratoires et Ateliers",
        other => other,
    }
}

/// Broad family of a category, used to pick an icon or grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Teaching,
    Department,
    Laboratory,
    Other,
}

impl CategoryKind {
    /// Classify a category key by substring; the first match wins.
    #[must_use]
    pub fn classify(key: &str) -> Self {
        if key.contains("pedagogique") {
            Self::Teaching
        } else if key.contains("departement") {
            Self::Department
        } else if key.contains("laboratoire") {
            Self::Laboratory
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teaching => "teaching",
            Self::Department => "department",
            Self::Laboratory => "laboratory",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Teaching => "🎓",
            Self::Department => "🏛️",
            Self::Laboratory => "🔬",
            Self::Other => "📍",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
