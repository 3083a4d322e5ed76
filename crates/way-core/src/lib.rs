//! # way-core
//!
//! Core types and error taxonomy for Wayfinder.
//!
//! This crate provides the foundational types shared across all Wayfinder crates:
//! - [`Destination`] identifiers and the asset naming layout for route photos
//! - [`Step`] and [`StepSequence`], the gap-free ordered route
//! - Cursor enums ([`Direction`], [`DiscoveryState`]) with state machine transitions
//! - [`SessionSnapshot`], the read-only view handed to front-ends
//! - The user-visible [`NavError`] taxonomy

pub mod destination;
pub mod enums;
pub mod errors;
pub mod layout;
pub mod snapshot;
pub mod step;

pub use destination::Destination;
pub use enums::{Direction, DiscoveryState};
pub use errors::NavError;
pub use layout::{AssetLayout, AssetPath};
pub use snapshot::{SessionId, SessionSnapshot};
pub use step::{Step, StepSequence};
