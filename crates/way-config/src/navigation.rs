//! Navigation engine configuration.

use serde::{Deserialize, Serialize};

/// Hard upper bound on discovery probes per destination.
pub const DEFAULT_PROBE_CEILING: u32 = 50;

const fn default_probe_ceiling() -> u32 {
    DEFAULT_PROBE_CEILING
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Maximum number of existence probes issued while discovering a route.
    #[serde(default = "default_probe_ceiling")]
    pub probe_ceiling: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            probe_ceiling: default_probe_ceiling(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(NavigationConfig::default().probe_ceiling, 50);
    }
}
