use driftwatch_core::config::DdmConfig;
use driftwatch_core::{DriftwatchResult, IDriftDetector};

/// Error-rate drift detector. Holds only scalar statistics.
#[derive(Debug, Clone)]
pub struct Ddm {
    config: DdmConfig,
    sample_count: u64,
    error_rate: f64,
    std_dev: f64,
    min_sum: f64,
    min_error: f64,
    min_std: f64,
    warning_zone: bool,
    change_detected: bool,
}

impl Ddm {
    pub fn new() -> Self {
        Self::build(DdmConfig::default())
    }

    pub fn from_config(config: &DdmConfig) -> DriftwatchResult<Self> {
        config.validate()?;
        Ok(Self::build(config.clone()))
    }

    fn build(config: DdmConfig) -> Self {
        Self {
            config,
            sample_count: 1,
            error_rate: 1.0,
            std_dev: 0.0,
            min_sum: f64::INFINITY,
            min_error: f64::INFINITY,
            min_std: f64::INFINITY,
            warning_zone: false,
            change_detected: false,
        }
    }

    /// Feed one prediction outcome: `1.0` for an error, `0.0` for a hit.
    ///
    /// Returns `true` when the error rate rose past the drift level. The
    /// statistics restart on the call following a drift.
    pub fn update(&mut self, is_error: f64) -> bool {
        if self.change_detected {
            self.reset();
        }

        let n = self.sample_count as f64;
        self.error_rate += (is_error - self.error_rate) / n;
        self.std_dev = (self.error_rate * (1.0 - self.error_rate) / n).max(0.0).sqrt();
        self.sample_count += 1;

        if self.sample_count < self.config.min_num_instances {
            return false;
        }

        let current = self.error_rate + self.std_dev;
        if current <= self.min_sum {
            self.min_error = self.error_rate;
            self.min_std = self.std_dev;
            self.min_sum = current;
        }

        let was_warning = self.warning_zone;
        if current > self.min_error + self.config.drift_level * self.min_std {
            self.change_detected = true;
            tracing::debug!(
                samples = self.sample_count,
                error_rate = self.error_rate,
                min_error = self.min_error,
                min_std = self.min_std,
                "ddm drift"
            );
        } else if current > self.min_error + self.config.warning_level * self.min_std {
            self.warning_zone = true;
            if !was_warning {
                tracing::debug!(
                    samples = self.sample_count,
                    error_rate = self.error_rate,
                    "ddm entered warning zone"
                );
            }
        } else {
            self.warning_zone = false;
        }

        self.change_detected
    }

    /// Convenience wrapper over [`Ddm::update`] for boolean outcomes.
    pub fn update_error(&mut self, is_error: bool) -> bool {
        self.update(if is_error { 1.0 } else { 0.0 })
    }

    /// Current error-rate estimate.
    pub fn estimate(&self) -> f64 {
        self.error_rate
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// `(min_error, min_std)` pair where `error_rate + std_dev` was smallest.
    pub fn minimum(&self) -> (f64, f64) {
        (self.min_error, self.min_std)
    }

    pub fn in_warning_zone(&self) -> bool {
        self.warning_zone
    }

    pub fn change_detected(&self) -> bool {
        self.change_detected
    }

    pub fn config(&self) -> &DdmConfig {
        &self.config
    }

    pub fn reset(&mut self) {
        self.sample_count = 1;
        self.error_rate = 1.0;
        self.std_dev = 0.0;
        self.min_sum = f64::INFINITY;
        self.min_error = f64::INFINITY;
        self.min_std = f64::INFINITY;
        self.warning_zone = false;
        self.change_detected = false;
    }
}

impl Default for Ddm {
    fn default() -> Self {
        Self::new()
    }
}

impl IDriftDetector for Ddm {
    fn update(&mut self, value: f64) -> bool {
        Ddm::update(self, value)
    }

    fn estimate(&self) -> f64 {
        Ddm::estimate(self)
    }

    fn reset(&mut self) {
        Ddm::reset(self)
    }

    fn in_warning_zone(&self) -> bool {
        Ddm::in_warning_zone(self)
    }

    fn name(&self) -> &'static str {
        "ddm"
    }
}
