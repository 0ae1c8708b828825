use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{DriftwatchError, DriftwatchResult};

/// Volatility detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatilityConfig {
    /// Capacity of both the buffer and the reservoir.
    pub size: usize,
    /// Tolerated deviation of the buffer/reservoir std ratio from 1.
    pub confidence: f64,
    /// Seed for reservoir replacement. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            size: defaults::DEFAULT_VOLATILITY_SIZE,
            confidence: defaults::DEFAULT_VOLATILITY_CONFIDENCE,
            seed: None,
        }
    }
}

impl VolatilityConfig {
    pub fn validate(&self) -> DriftwatchResult<()> {
        if self.size == 0 {
            return Err(DriftwatchError::invalid("volatility.size", "must be non-zero"));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(DriftwatchError::invalid(
                "volatility.confidence",
                format!("must lie in (0, 1), got {}", self.confidence),
            ));
        }
        Ok(())
    }
}
