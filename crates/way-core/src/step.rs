use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::destination::Destination;
use crate::layout::{AssetLayout, AssetPath};

/// One waypoint (one photo) on the route to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Step {
    /// 1-based position in the route.
    pub index: u32,
    /// Logical path of the photo for this step.
    pub locator: AssetPath,
}

/// Gap-free, 1-indexed route for one destination.
///
/// Steps can only be appended through [`StepSequence::push_next`], which
/// assigns the next index, so indices are always `1..=len`. The sequence is
/// read-only once handed to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct StepSequence {
    destination: Destination,
    steps: Vec<Step>,
}

impl StepSequence {
    #[must_use]
    pub const fn new(destination: Destination) -> Self {
        Self {
            destination,
            steps: Vec::new(),
        }
    }

    /// Build a sequence of `len` steps laid out by `layout`.
    #[must_use]
    pub fn with_len(destination: Destination, layout: &AssetLayout, len: u32) -> Self {
        let mut sequence = Self::new(destination);
        for _ in 0..len {
            sequence.push_next(layout);
        }
        sequence
    }

    /// Index the next step would receive.
    #[must_use]
    pub fn next_index(&self) -> u32 {
        u32::try_from(self.steps.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    /// Append the step at [`next_index`](Self::next_index) and return it.
    pub fn push_next(&mut self, layout: &AssetLayout) -> &Step {
        let index = self.next_index();
        let locator = layout.step_path(&self.destination, index);
        self.steps.push(Step { index, locator });
        &self.steps[self.steps.len() - 1]
    }

    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step at 0-based `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// An empty sequence means "no route published for this destination".
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 0-based position of the final step.
    #[must_use]
    pub fn last_position(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }
}
