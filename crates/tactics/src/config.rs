//! Tunable parameters of the decision core.

use serde::{Deserialize, Serialize};

/// Decision-core configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsConfig {
    /// How long, in seconds, a unit remembers its most recent attacker.
    /// Past this window the threat is forgotten and the unit stands down.
    pub threat_forget_window: f32,
}

impl TacticsConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_THREAT_FORGET_WINDOW: f32 = 4.0;

    pub fn new() -> Self {
        Self {
            threat_forget_window: Self::DEFAULT_THREAT_FORGET_WINDOW,
        }
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self::new()
    }
}
