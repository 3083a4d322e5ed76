use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::NavError;

/// Opaque identifier naming the physical endpoint of a route (room, lab, office).
///
/// The value is embedded verbatim into asset paths. Nothing is escaped or
/// sanitised; [`Destination::looks_like_path`] only reports values that would
/// change the shape of the resulting path so callers can log them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Destination(String);

impl Destination {
    /// Wrap an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DestinationMissing`] when the identifier is empty or
    /// only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, NavError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(NavError::DestinationMissing);
        }
        Ok(Self(id))
    }

    /// Wrap an optional identifier, as supplied by a route parameter.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DestinationMissing`] for `None` or an empty value.
    pub fn from_param(param: Option<&str>) -> Result<Self, NavError> {
        param.map_or(Err(NavError::DestinationMissing), Self::new)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier contains separators or parent references.
    #[must_use]
    pub fn looks_like_path(&self) -> bool {
        self.0.contains('/') || self.0.contains('\\') || self.0.contains("..")
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_identifier_verbatim() {
        let dest = Destination::new("Salle B 12").unwrap();
        assert_eq!(dest.as_str(), "Salle B 12");
        assert_eq!(dest.to_string(), "Salle B 12");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(Destination::new(""), Err(NavError::DestinationMissing));
        assert_eq!(Destination::new("   "), Err(NavError::DestinationMissing));
    }

    #[test]
    fn missing_param_is_destination_missing() {
        assert_eq!(
            Destination::from_param(None),
            Err(NavError::DestinationMissing)
        );
        assert!(Destination::from_param(Some("Lab-3")).is_ok());
    }

    #[test]
    fn flags_path_like_identifiers() {
        assert!(Destination::new("../secret").unwrap().looks_like_path());
        assert!(Destination::new("a/b").unwrap().looks_like_path());
        assert!(!Destination::new("Lab-3").unwrap().looks_like_path());
    }

    #[test]
    fn serializes_as_plain_string() {
        let dest = Destination::new("Lab-3").unwrap();
        assert_eq!(serde_json::to_string(&dest).unwrap(), "\"Lab-3\"");
    }
}
