use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use driftwatch_core::config::VolatilityConfig;
use driftwatch_core::{DriftwatchResult, IDriftDetector};

use crate::buffer::Buffer;
use crate::reservoir::Reservoir;

/// Meta-detector watching how often an inner detector fires.
///
/// `D` is any [`IDriftDetector`]; pass `&mut detector` to keep ownership
/// with the caller, or a value/`Box` to hand it over.
#[derive(Debug)]
pub struct VolatilityDetector<D, R = StdRng> {
    detector: D,
    buffer: Buffer,
    reservoir: Reservoir<R>,
    confidence: f64,
    /// Samples since the previous inner drift.
    timestamp: u64,
    samples: u64,
    recent_intervals: Vec<f64>,
    rolling_index: usize,
    last_drift_at: Option<u64>,
    relative_variance: Option<f64>,
    drift_found: bool,
    volatility_found: bool,
}

impl<D: IDriftDetector> VolatilityDetector<D, StdRng> {
    /// Wrap `detector` with buffer and reservoir of capacity `size` and the
    /// default confidence.
    pub fn new(detector: D, size: usize) -> Self {
        let config = VolatilityConfig {
            size,
            ..VolatilityConfig::default()
        };
        Self::build(detector, &config, StdRng::from_entropy())
    }

    pub fn from_config(detector: D, config: &VolatilityConfig) -> DriftwatchResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::build(detector, config, rng))
    }
}

impl<D: IDriftDetector, R: Rng> VolatilityDetector<D, R> {
    /// Wrap `detector`, drawing reservoir replacements from `rng`.
    pub fn with_rng(detector: D, config: &VolatilityConfig, rng: R) -> DriftwatchResult<Self> {
        config.validate()?;
        Ok(Self::build(detector, config, rng))
    }

    fn build(detector: D, config: &VolatilityConfig, rng: R) -> Self {
        let size = config.size.max(1);
        Self {
            detector,
            buffer: Buffer::new(size),
            reservoir: Reservoir::with_rng(size, rng),
            confidence: config.confidence,
            timestamp: 0,
            samples: 0,
            recent_intervals: vec![0.0; size * 2],
            rolling_index: 0,
            last_drift_at: None,
            relative_variance: None,
            drift_found: false,
            volatility_found: false,
        }
    }

    /// Feed one value to the inner detector. Returns `true` when the rate of
    /// inner drifts shifted, independent of whether the inner detector fired.
    pub fn update(&mut self, value: f64) -> bool {
        self.samples += 1;
        self.drift_found = self.detector.update(value);
        self.timestamp += 1;

        if !self.drift_found {
            self.volatility_found = false;
            return false;
        }

        // The interval counts every sample since the previous drift, this one included.
        let interval = self.timestamp as f64;
        let was_full = self.buffer.is_full();
        let evicted = self.buffer.add(interval);
        if let Some(old) = evicted.filter(|_| was_full) {
            self.reservoir.add(old);
        }

        self.recent_intervals[self.rolling_index] = interval;
        self.rolling_index = (self.rolling_index + 1) % self.recent_intervals.len();
        self.timestamp = 0;
        self.last_drift_at = Some(self.samples);

        self.volatility_found = false;
        if self.buffer.is_full() && self.reservoir.is_full() {
            let relative = self.buffer.stddev() / self.reservoir.stddev();
            self.relative_variance = Some(relative);
            if relative > 1.0 + self.confidence || relative < 1.0 - self.confidence {
                tracing::debug!(
                    samples = self.samples,
                    relative_variance = relative,
                    buffer_mean = self.buffer.mean(),
                    reservoir_mean = self.reservoir.mean(),
                    "volatility shift"
                );
                self.buffer.clear();
                self.volatility_found = true;
            }
        }
        self.volatility_found
    }

    /// Whether the inner detector fired on the last update.
    pub fn drift_found(&self) -> bool {
        self.drift_found
    }

    pub fn volatility_found(&self) -> bool {
        self.volatility_found
    }

    /// Total values fed so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Sample number of the most recent inner drift.
    pub fn last_drift_at(&self) -> Option<u64> {
        self.last_drift_at
    }

    /// Rolling log of the last `2 * size` drift intervals, in slot order.
    pub fn recent_intervals(&self) -> &[f64] {
        &self.recent_intervals
    }

    /// Buffer/reservoir std ratio from the last comparison.
    pub fn relative_variance(&self) -> Option<f64> {
        self.relative_variance
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn reservoir(&self) -> &Reservoir<R> {
        &self.reservoir
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    pub fn into_inner(self) -> D {
        self.detector
    }

    /// Clear buffer, reservoir, counters, and the inner detector.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.buffer.clear();
        self.reservoir.clear();
        self.timestamp = 0;
        self.samples = 0;
        self.recent_intervals.fill(0.0);
        self.rolling_index = 0;
        self.last_drift_at = None;
        self.relative_variance = None;
        self.drift_found = false;
        self.volatility_found = false;
    }
}

impl<D: IDriftDetector, R: Rng + Send> IDriftDetector for VolatilityDetector<D, R> {
    fn update(&mut self, value: f64) -> bool {
        VolatilityDetector::update(self, value)
    }

    /// Delegates to the inner detector.
    fn estimate(&self) -> f64 {
        self.detector.estimate()
    }

    fn reset(&mut self) {
        VolatilityDetector::reset(self)
    }

    fn in_warning_zone(&self) -> bool {
        self.detector.in_warning_zone()
    }

    fn reports_volatility(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "volatility"
    }
}
