//! [`AdaptiveWindow`]: the ADWIN change detector and mean estimator.

use driftwatch_core::config::defaults::{DEFAULT_ADWIN_DELTA, MIN_SUBWINDOW_LENGTH};
use driftwatch_core::config::AdwinConfig;
use driftwatch_core::{DriftwatchResult, IDriftDetector};

use crate::histogram::{bucket_size, ExponentialHistogram};

/// Variable-length window over a real-valued stream.
///
/// `sum / width` is the mean estimate. `variance` is the running sum of
/// squared deviations, maintained incrementally on insert and removal and
/// never recomputed from the buckets.
#[derive(Debug, Clone)]
pub struct AdaptiveWindow {
    config: AdwinConfig,
    histogram: ExponentialHistogram,
    width: u64,
    sum: f64,
    variance: f64,
    time: u64,
}

impl AdaptiveWindow {
    /// Create a window with confidence `delta` and default thresholds.
    ///
    /// `delta` is clamped into the open interval `(0, 1)`, and NaN falls back
    /// to the default. Use [`AdaptiveWindow::from_config`] to reject bad
    /// values instead.
    pub fn new(delta: f64) -> Self {
        let delta = if delta.is_nan() {
            DEFAULT_ADWIN_DELTA
        } else {
            delta.clamp(f64::EPSILON, 1.0 - f64::EPSILON)
        };
        Self::build(AdwinConfig::with_delta(delta))
    }

    /// Create a window from a validated config.
    pub fn from_config(config: &AdwinConfig) -> DriftwatchResult<Self> {
        config.validate()?;
        Ok(Self::build(config.clone()))
    }

    fn build(config: AdwinConfig) -> Self {
        Self {
            histogram: ExponentialHistogram::new(config.max_buckets),
            config,
            width: 0,
            sum: 0.0,
            variance: 0.0,
            time: 0,
        }
    }

    pub fn config(&self) -> &AdwinConfig {
        &self.config
    }

    /// Add one observation, compress the histogram, and try to shrink the
    /// window. Returns `true` if the window was cut.
    pub fn update(&mut self, value: f64) -> bool {
        self.insert_element(value);
        self.histogram.compress();
        self.check_drift()
    }

    /// Current windowed mean, `0` for an empty window.
    pub fn estimate(&self) -> f64 {
        if self.width > 0 {
            self.sum / self.width as f64
        } else {
            0.0
        }
    }

    /// Window size in observation-equivalents.
    pub fn length(&self) -> f64 {
        self.width as f64
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Population variance of the window, `0` when empty.
    pub fn variance(&self) -> f64 {
        if self.width > 0 {
            self.variance.max(0.0) / self.width as f64
        } else {
            0.0
        }
    }

    /// Number of updates seen since construction or the last reset.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn bucket_count(&self) -> usize {
        self.histogram.bucket_count()
    }

    pub fn histogram(&self) -> &ExponentialHistogram {
        &self.histogram
    }

    pub fn reset(&mut self) {
        self.histogram.clear();
        self.width = 0;
        self.sum = 0.0;
        self.variance = 0.0;
        self.time = 0;
    }

    fn insert_element(&mut self, value: f64) {
        self.width += 1;
        self.histogram.push_front(value, 0.0);
        if self.width > 1 {
            let prev = (self.width - 1) as f64;
            let delta = value - self.sum / prev;
            self.variance += prev * delta * delta / self.width as f64;
        }
        self.sum += value;
    }

    /// Remove the oldest bucket and subtract its contribution.
    ///
    /// Cuts drop buckets one at a time because each removal needs its own
    /// variance correction against the remaining window.
    fn delete_element(&mut self) {
        let Some((row, bucket)) = self.histogram.pop_tail() else {
            return;
        };
        let n1 = bucket_size(row);
        self.width = self.width.saturating_sub(n1);
        self.sum -= bucket.sum;

        if self.width == 0 {
            self.sum = 0.0;
            self.variance = 0.0;
            return;
        }

        let n1 = n1 as f64;
        let rest = self.width as f64;
        let diff = bucket.sum / n1 - self.sum / rest;
        let removed = bucket.variance + n1 * rest * diff * diff / (n1 + rest);
        // Incremental updates drift; never let the running total go negative.
        self.variance = (self.variance - removed).max(0.0);
    }

    fn check_drift(&mut self) -> bool {
        self.time += 1;
        if self.time % self.config.min_clock != 0 || self.width <= self.config.min_window_length {
            return false;
        }

        let mut changed = false;
        while let Some(cut) = self.find_cut() {
            tracing::debug!(
                dropped_buckets = cut.buckets,
                old_len = cut.n0,
                new_len = cut.n1,
                old_mean = cut.mean0,
                new_mean = cut.mean1,
                epsilon = cut.epsilon,
                "adwin window cut"
            );
            for _ in 0..cut.buckets {
                self.delete_element();
            }
            changed = true;
        }
        changed
    }

    /// Walk from the oldest bucket toward the newest, growing the older
    /// sub-window, and return the first split whose means differ significantly.
    fn find_cut(&self) -> Option<Cut> {
        let mut n0 = 0u64;
        let mut n1 = self.width;
        let mut u0 = 0.0;
        let mut u1 = self.sum;

        for (walked, (row, bucket)) in self.histogram.iter_from_tail().enumerate() {
            let size = bucket_size(row);
            n0 += size;
            n1 = n1.saturating_sub(size);
            u0 += bucket.sum;
            u1 -= bucket.sum;

            if n1 < MIN_SUBWINDOW_LENGTH {
                break;
            }
            if n0 < MIN_SUBWINDOW_LENGTH {
                continue;
            }
            if let Some(epsilon) = self.cut_expression(n0, n1, u0, u1) {
                return Some(Cut {
                    buckets: walked + 1,
                    n0,
                    n1,
                    mean0: u0 / n0 as f64,
                    mean1: u1 / n1 as f64,
                    epsilon,
                });
            }
        }
        None
    }

    /// Hoeffding/Bernstein-style cut test. Returns the bound when
    /// `|u0/n0 - u1/n1|` exceeds it.
    ///
    /// Callers guarantee `n0, n1 >= MIN_SUBWINDOW_LENGTH`.
    fn cut_expression(&self, n0: u64, n1: u64, u0: f64, u1: f64) -> Option<f64> {
        let n = self.width as f64;
        let n0 = n0 as f64;
        let n1 = n1 as f64;
        let diff = u0 / n0 - u1 / n1;
        let v = self.variance.max(0.0) / n;
        let dd = (2.0 * n.ln() / self.config.delta).ln();
        let offset = (MIN_SUBWINDOW_LENGTH - 1) as f64;
        let m = 1.0 / (n0 - offset) + 1.0 / (n1 - offset);
        let epsilon = (2.0 * m * v * dd).sqrt() + 2.0 / 3.0 * dd * m;
        (diff.abs() > epsilon).then_some(epsilon)
    }
}

impl Default for AdaptiveWindow {
    fn default() -> Self {
        Self::build(AdwinConfig::default())
    }
}

/// A significant split found by [`AdaptiveWindow::find_cut`].
struct Cut {
    /// Buckets making up the older sub-window.
    buckets: usize,
    n0: u64,
    n1: u64,
    mean0: f64,
    mean1: f64,
    epsilon: f64,
}

impl IDriftDetector for AdaptiveWindow {
    fn update(&mut self, value: f64) -> bool {
        AdaptiveWindow::update(self, value)
    }

    fn estimate(&self) -> f64 {
        AdaptiveWindow::estimate(self)
    }

    fn reset(&mut self) {
        AdaptiveWindow::reset(self)
    }

    fn name(&self) -> &'static str {
        "adwin"
    }
}
