//! # way-nav
//!
//! The Wayfinder navigation engine.
//!
//! - [`Discoverer`] probes `1, 2, 3, …` against an asset store and returns the
//!   contiguous run of steps that exists, bounded by a probe ceiling.
//! - [`Stepper`] is the cursor state machine over a discovered route
//!   (advance / retreat / restart / asset-ready, derived arrival flag).
//! - [`Navigator`] owns one session at a time, applies discovery results only
//!   while their session is still active, prefetches the step after the cursor
//!   and publishes [`SessionSnapshot`](way_core::SessionSnapshot)s on a watch
//!   channel.

mod discover;
mod navigator;
mod prefetch;
mod stepper;

pub use discover::{Discoverer, Discovery, StopReason};
pub use navigator::{Completion, Discovered, DiscoveryJob, Navigator};
pub use stepper::{Cursor, Stepper, Transition};
