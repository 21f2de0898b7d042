//! Runtime tuning for drivers of the simulation.

use serde::{Deserialize, Serialize};

/// Knobs a driver may adjust without touching game balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Log a state checksum every N days (0 = disabled).
    pub checksum_frequency: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            checksum_frequency: 30,
        }
    }
}
