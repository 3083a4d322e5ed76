//! Cursor state machine over a discovered route.
//!
//! ```text
//! loading ──settle──▶ ready ──advance/retreat/restart──▶ ready
//!         └────────▶ empty
//!         └─fail───▶ failed
//! ```
//!
//! Transitions are synchronous. Outside `ready` they are ignored and report
//! [`Transition::Unavailable`].

use way_core::{Direction, DiscoveryState, Step, StepSequence};

/// Mutable position and status within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    last_direction: Direction,
    asset_ready: bool,
    discovery_state: DiscoveryState,
}

impl Cursor {
    const fn new(discovery_state: DiscoveryState) -> Self {
        Self {
            position: 0,
            last_direction: Direction::None,
            asset_ready: false,
            discovery_state,
        }
    }

    /// 0-based position in the route.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Whether the asset for the current position finished loading.
    #[must_use]
    pub const fn asset_ready(&self) -> bool {
        self.asset_ready
    }

    #[must_use]
    pub const fn discovery_state(&self) -> DiscoveryState {
        self.discovery_state
    }
}

/// Outcome of a cursor transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The position changed.
    Moved { from: usize, to: usize },
    /// Direction and asset status were reset without moving (restart at 0).
    Reset,
    /// Boundary no-op: advance at the last step or retreat at the first.
    Unchanged,
    /// The route is not ready (still loading, empty or failed).
    Unavailable,
}

impl Transition {
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// A route plus the cursor walking it.
#[derive(Debug, Clone)]
pub struct Stepper {
    sequence: Option<StepSequence>,
    cursor: Cursor,
}

impl Stepper {
    /// Stepper waiting for discovery.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            sequence: None,
            cursor: Cursor::new(DiscoveryState::Loading),
        }
    }

    /// Stepper for a session that could not start (no destination).
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            sequence: None,
            cursor: Cursor::new(DiscoveryState::Failed),
        }
    }

    /// Stepper already settled on `sequence`.
    #[must_use]
    pub fn ready(sequence: StepSequence) -> Self {
        let mut stepper = Self::loading();
        stepper.settle(sequence);
        stepper
    }

    /// Hand the discovered route to a loading stepper.
    ///
    /// Moves to `ready` with the cursor at 0, or to `empty` for an empty
    /// route. Ignored (returning the current state) once already settled.
    pub fn settle(&mut self, sequence: StepSequence) -> DiscoveryState {
        let next = if sequence.is_empty() {
            DiscoveryState::Empty
        } else {
            DiscoveryState::Ready
        };
        if !self.cursor.discovery_state.can_transition_to(next) {
            tracing::debug!(
                state = %self.cursor.discovery_state,
                "stepper already settled, ignoring route"
            );
            return self.cursor.discovery_state;
        }
        self.sequence = Some(sequence);
        self.cursor = Cursor::new(next);
        next
    }

    /// Move one step forward. No-op at the last step.
    pub fn advance(&mut self) -> Transition {
        let Some(last) = self.ready_last_position() else {
            return Transition::Unavailable;
        };
        let from = self.cursor.position;
        if from >= last {
            return Transition::Unchanged;
        }
        self.move_to(from + 1, Direction::Forward)
    }

    /// Move one step back. No-op at the first step.
    pub fn retreat(&mut self) -> Transition {
        if self.ready_last_position().is_none() {
            return Transition::Unavailable;
        }
        let from = self.cursor.position;
        if from == 0 {
            return Transition::Unchanged;
        }
        self.move_to(from - 1, Direction::Backward)
    }

    /// Go back to the first step and clear the direction.
    pub fn restart(&mut self) -> Transition {
        if self.ready_last_position().is_none() {
            return Transition::Unavailable;
        }
        let from = self.cursor.position;
        self.cursor.position = 0;
        self.cursor.last_direction = Direction::None;
        self.cursor.asset_ready = false;
        if from == 0 {
            Transition::Reset
        } else {
            Transition::Moved { from, to: 0 }
        }
    }

    /// Record that the current step's asset has loaded. Idempotent.
    ///
    /// Returns `false` when there is no current step.
    pub fn mark_asset_ready(&mut self) -> bool {
        if self.current().is_none() {
            return false;
        }
        self.cursor.asset_ready = true;
        true
    }

    fn move_to(&mut self, to: usize, direction: Direction) -> Transition {
        let from = self.cursor.position;
        self.cursor.position = to;
        self.cursor.last_direction = direction;
        self.cursor.asset_ready = false;
        Transition::Moved { from, to }
    }

    fn ready_last_position(&self) -> Option<usize> {
        if self.cursor.discovery_state != DiscoveryState::Ready {
            return None;
        }
        self.sequence.as_ref().and_then(StepSequence::last_position)
    }

    /// True exactly when the cursor sits on the final step.
    #[must_use]
    pub fn at_destination(&self) -> bool {
        self.ready_last_position() == Some(self.cursor.position)
    }

    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[must_use]
    pub const fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    /// Number of steps in the route (0 until ready).
    #[must_use]
    pub fn total(&self) -> usize {
        self.sequence.as_ref().map_or(0, StepSequence::len)
    }

    /// Step under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Step> {
        self.ready_last_position()?;
        self.sequence.as_ref()?.get(self.cursor.position)
    }

    /// Step right after the cursor, the prefetch target.
    #[must_use]
    pub fn upcoming(&self) -> Option<&Step> {
        self.ready_last_position()?;
        self.sequence.as_ref()?.get(self.cursor.position + 1)
    }
}
