use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use way_core::{Destination, NavError};

/// One row of the identity table.
///
/// Every column is optional on the wire. Columns not modelled here are kept
/// in [`IdentityRecord::extra`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    #[serde(default)]
    pub cin: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub numero_examen: String,
    #[serde(default)]
    pub concours: String,
    /// Assigned room; doubles as the navigation destination.
    #[serde(default)]
    pub salle: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityRecord {
    /// `"prenom nom"`, skipping whichever part is blank.
    #[must_use]
    pub fn full_name(&self) -> String {
        [self.prenom.trim(), self.nom.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The assigned room as a navigation destination.
    ///
    /// # Errors
    ///
    /// [`NavError::DestinationMissing`] when no room is assigned.
    pub fn destination(&self) -> Result<Destination, NavError> {
        Destination::new(self.salle.trim())
    }
}
