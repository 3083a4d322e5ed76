//! Cursor enums for the navigation state machine.
//!
//! All enums use `snake_case` serialization. [`DiscoveryState`] exposes
//! `allowed_next_states()` so the session controller can reject impossible
//! transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Direction of the most recent cursor move. Front-ends use it to pick a
/// transition animation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DiscoveryState
// ---------------------------------------------------------------------------

/// Where a session is in its discovery lifecycle.
///
/// ```text
/// loading → ready
///         → empty
///         → failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryState {
    Loading,
    Ready,
    Empty,
    Failed,
}

impl DiscoveryState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Loading => &[Self::Ready, Self::Empty, Self::Failed],
            Self::Ready | Self::Empty | Self::Failed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether discovery has finished, successfully or not.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Empty => "empty",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DiscoveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_settles_once() {
        assert!(DiscoveryState::Loading.can_transition_to(DiscoveryState::Ready));
        assert!(DiscoveryState::Loading.can_transition_to(DiscoveryState::Empty));
        assert!(DiscoveryState::Loading.can_transition_to(DiscoveryState::Failed));
        assert!(!DiscoveryState::Ready.can_transition_to(DiscoveryState::Empty));
        assert!(!DiscoveryState::Empty.can_transition_to(DiscoveryState::Loading));
    }

    #[test]
    fn settled_states() {
        assert!(!DiscoveryState::Loading.is_settled());
        assert!(DiscoveryState::Failed.is_settled());
    }

    #[test]
    fn snake_case_serialization() {
        assert_eq!(
            serde_json::to_string(&DiscoveryState::Ready).unwrap(),
            "\"ready\""
        );
        assert_eq!(serde_json::to_string(&Direction::None).unwrap(), "\"none\"");
        assert_eq!(Direction::default(), Direction::None);
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}
