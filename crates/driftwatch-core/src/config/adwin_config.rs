use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{DriftwatchError, DriftwatchResult};

/// ADWIN configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdwinConfig {
    /// Confidence of the cut test. Smaller values mean fewer false alarms.
    pub delta: f64,
    /// Buckets kept per histogram row before the two oldest are merged.
    pub max_buckets: usize,
    /// Cut checks run every `min_clock` updates.
    pub min_clock: u64,
    /// Window must exceed this width before any cut is attempted.
    pub min_window_length: u64,
}

impl Default for AdwinConfig {
    fn default() -> Self {
        Self {
            delta: defaults::DEFAULT_ADWIN_DELTA,
            max_buckets: defaults::DEFAULT_MAX_BUCKETS,
            min_clock: defaults::DEFAULT_MIN_CLOCK,
            min_window_length: defaults::DEFAULT_MIN_WINDOW_LENGTH,
        }
    }
}

impl AdwinConfig {
    /// Default config with a custom confidence.
    pub fn with_delta(delta: f64) -> Self {
        Self {
            delta,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> DriftwatchResult<()> {
        if !(self.delta > 0.0 && self.delta < 1.0) {
            return Err(DriftwatchError::invalid(
                "adwin.delta",
                format!("must lie in (0, 1), got {}", self.delta),
            ));
        }
        if self.max_buckets < 2 {
            return Err(DriftwatchError::invalid(
                "adwin.max_buckets",
                format!("must be at least 2, got {}", self.max_buckets),
            ));
        }
        if self.min_clock == 0 {
            return Err(DriftwatchError::invalid("adwin.min_clock", "must be non-zero"));
        }
        Ok(())
    }
}
