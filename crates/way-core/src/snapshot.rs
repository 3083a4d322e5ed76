//! Read-only session views for front-ends.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::destination::Destination;
use crate::enums::{Direction, DiscoveryState};
use crate::step::Step;

/// Identity of one navigation session within a navigator.
///
/// Discovery results carry the id they were started for; results whose id no
/// longer matches the active session are dropped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nav-{:04}", self.0)
    }
}

/// Point-in-time view of a navigation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionSnapshot {
    pub session: SessionId,
    /// `None` when the session was entered without a destination.
    pub destination: Option<Destination>,
    pub state: DiscoveryState,
    /// 0-based cursor position.
    pub position: usize,
    /// Number of discovered steps (0 until discovery completes).
    pub total: usize,
    /// 1-based step number for display, 0 when not ready.
    pub step_number: usize,
    pub last_direction: Direction,
    pub asset_ready: bool,
    pub at_destination: bool,
    /// Step under the cursor.
    pub current: Option<Step>,
    /// Step that is prefetched ahead of the cursor.
    pub upcoming: Option<Step>,
}

impl SessionSnapshot {
    /// Fraction of the route covered, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f32 {
        if self.state != DiscoveryState::Ready || self.total == 0 {
            return 0.0;
        }
        self.step_number as f32 / self.total as f32
    }
}
