//! User-visible navigation failures.
//!
//! Only two failure kinds ever leave the navigation engine. Probe failures during
//! discovery and failed prefetches are absorbed where they happen (see
//! `way-nav`) and never show up here. Transport-level errors are defined in
//! their respective crates (`AssetError`, `LookupError`, `ManifestError`).

use thiserror::Error;

/// Failures that end a navigation session in a terminal, user-visible state.
///
/// Neither kind is retried automatically. Starting a new session is the only
/// recovery path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No destination identifier was supplied.
    #[error("no destination supplied, route unavailable")]
    DestinationMissing,

    /// Discovery found no step at index 1 for a valid destination.
    #[error("no route published for '{destination}'")]
    NoRouteFound { destination: String },
}

impl NavError {
    /// Short label for front-ends ("unavailable" vs "not available").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DestinationMissing => "unavailable",
            Self::NoRouteFound { .. } => "not available",
        }
    }
}
