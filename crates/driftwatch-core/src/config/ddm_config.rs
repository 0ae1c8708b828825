use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{DriftwatchError, DriftwatchResult};

/// DDM configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DdmConfig {
    /// Samples required before the error-rate statistics are trusted.
    pub min_num_instances: u64,
    /// Multiplier on the minimum std for the warning zone.
    pub warning_level: f64,
    /// Multiplier on the minimum std for a confirmed drift.
    pub drift_level: f64,
}

impl Default for DdmConfig {
    fn default() -> Self {
        Self {
            min_num_instances: defaults::DEFAULT_DDM_MIN_NUM_INSTANCES,
            warning_level: defaults::DEFAULT_DDM_WARNING_LEVEL,
            drift_level: defaults::DEFAULT_DDM_DRIFT_LEVEL,
        }
    }
}

impl DdmConfig {
    pub fn validate(&self) -> DriftwatchResult<()> {
        if !(self.warning_level > 0.0) {
            return Err(DriftwatchError::invalid(
                "ddm.warning_level",
                format!("must be positive, got {}", self.warning_level),
            ));
        }
        if !(self.drift_level > self.warning_level) {
            return Err(DriftwatchError::invalid(
                "ddm.drift_level",
                format!(
                    "must exceed warning_level ({}), got {}",
                    self.warning_level, self.drift_level
                ),
            ));
        }
        Ok(())
    }
}
