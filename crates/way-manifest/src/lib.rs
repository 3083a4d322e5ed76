//! # way-manifest
//!
//! The category manifest: a JSON document grouping navigable places under
//! categories, each place mapping a display label to a resource path whose
//! last segment is the navigation destination.
//!
//! ```json
//! {
//!   "espaces_pedagogiques": { "Amphi A": "/navigate/Amphi-A" },
//!   "laboratoires_et_ateliers": { "Labo Réseaux": "/navigate/Lab-3" }
//! }
//! ```
//!
//! Categories and places keep their document order.

mod category;
mod error;
mod manifest;
mod sections;
mod source;

pub use category::{CategoryKind, category_title};
pub use error::ManifestError;
pub use manifest::{CategoryEntry, CategoryManifest, CategorySummary};
pub use sections::ExpandedSections;
pub use source::ManifestSource;
