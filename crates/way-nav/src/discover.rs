//! Route discovery.
//!
//! Step counts are not declared anywhere, so they are found by probing the
//! numbered asset space in order. Probe `N+1` is only issued after probe `N`
//! resolved, which makes the result exactly the maximal run starting at 1.

use std::fmt;

use way_assets::AssetStore;
use way_config::{DEFAULT_PROBE_CEILING, WayConfig};
use way_core::{AssetLayout, Destination, StepSequence};

/// Probes an asset store for the steps of a destination.
#[derive(Debug, Clone)]
pub struct Discoverer {
    layout: AssetLayout,
    ceiling: u32,
}

impl Default for Discoverer {
    fn default() -> Self {
        Self::new(AssetLayout::default(), DEFAULT_PROBE_CEILING)
    }
}

/// Result of one discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    pub sequence: StepSequence,
    /// Number of probes issued.
    pub probes: u32,
    pub stop: StopReason,
}

/// Why discovery stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The asset at `index` does not exist.
    Gap { index: u32 },
    /// The probe for `index` failed; the route ends before it.
    ProbeFailed { index: u32, error: String },
    /// The probe ceiling was reached with every probe succeeding.
    Ceiling,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gap { index } => write!(f, "no asset at step {index}"),
            Self::ProbeFailed { index, error } => write!(f, "probe for step {index} failed: {error}"),
            Self::Ceiling => f.write_str("probe ceiling reached"),
        }
    }
}

impl Discoverer {
    /// A ceiling of 0 is raised to 1 so at least index 1 is always probed.
    #[must_use]
    pub fn new(layout: AssetLayout, ceiling: u32) -> Self {
        Self {
            layout,
            ceiling: ceiling.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &WayConfig) -> Self {
        Self::new(config.assets.layout(), config.navigation.probe_ceiling)
    }

    #[must_use]
    pub const fn layout(&self) -> &AssetLayout {
        &self.layout
    }

    #[must_use]
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Discover the route to `destination`.
    ///
    /// An empty sequence means no route is published. Probe failures never
    /// surface as errors; they end the route at that index.
    pub async fn discover<S: AssetStore>(
        &self,
        store: &S,
        destination: &Destination,
    ) -> StepSequence {
        self.run(store, destination).await.sequence
    }

    /// Discover the route and report how the run ended.
    pub async fn run<S: AssetStore>(&self, store: &S, destination: &Destination) -> Discovery {
        if destination.looks_like_path() {
            tracing::warn!(%destination, "destination contains path separators; probing verbatim");
        }

        let mut sequence = StepSequence::new(destination.clone());
        let mut probes = 0u32;

        let stop = loop {
            if probes >= self.ceiling {
                break StopReason::Ceiling;
            }
            let index = sequence.next_index();
            let path = self.layout.step_path(destination, index);
            probes += 1;
            tracing::debug!(%destination, index, %path, "probing step");

            match store.probe(&path).await {
                Ok(true) => {
                    sequence.push_next(&self.layout);
                }
                Ok(false) => break StopReason::Gap { index },
                Err(error) => {
                    tracing::debug!(%destination, index, %error, "probe failed, ending route here");
                    break StopReason::ProbeFailed {
                        index,
                        error: error.to_string(),
                    };
                }
            }
        };

        if stop == StopReason::Ceiling {
            tracing::warn!(%destination, ceiling = self.ceiling, "probe ceiling reached");
        }
        tracing::info!(%destination, steps = sequence.len(), probes, "route discovered");

        Discovery {
            sequence,
            probes,
            stop,
        }
    }
}
