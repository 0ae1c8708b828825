use serde::{Deserialize, Serialize};

use driftwatch_core::DriftwatchResult;

/// Summary of one detector's run over a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorReport {
    pub detector: String,
    pub samples: u64,
    pub changes: usize,
    pub change_points: Vec<u64>,
    pub warnings: usize,
    pub final_estimate: f64,
    /// Wall time spent inside `update`, in microseconds.
    pub update_micros: u64,
}

impl MonitorReport {
    pub fn to_json(&self) -> DriftwatchResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// First change at or after `index`, if any.
    pub fn first_change_after(&self, index: u64) -> Option<u64> {
        self.change_points.iter().copied().find(|&p| p >= index)
    }
}
