//! [`DriftMonitor`]: counts, times, and logs what a detector reports.

use std::time::{Duration, Instant};

use driftwatch_core::IDriftDetector;

use crate::report::MonitorReport;
use crate::tracing_setup::events;

/// Outcome of feeding one value through a [`DriftMonitor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Zero-based stream position of the value.
    pub index: u64,
    pub drift: bool,
    pub warning: bool,
    /// Detector estimate after the update.
    pub estimate: f64,
}

/// Wraps a detector the way a retraining classifier would: every reported
/// change is counted and its stream position recorded.
#[derive(Debug)]
pub struct DriftMonitor<D> {
    detector: D,
    samples: u64,
    change_points: Vec<u64>,
    warnings: usize,
    in_warning: bool,
    elapsed: Duration,
}

impl<D: IDriftDetector> DriftMonitor<D> {
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            samples: 0,
            change_points: Vec::new(),
            warnings: 0,
            in_warning: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Feed one value to the detector.
    pub fn observe(&mut self, value: f64) -> Observation {
        let index = self.samples;
        let started = Instant::now();
        let drift = self.detector.update(value);
        self.elapsed += started.elapsed();
        self.samples += 1;

        let estimate = self.detector.estimate();
        let warning = self.detector.in_warning_zone();
        let name = self.detector.name();

        if drift {
            self.change_points.push(index);
            if self.detector.reports_volatility() {
                events::volatility_shift(name, index);
            } else {
                events::drift_detected(name, index, estimate);
            }
        }
        if warning && !self.in_warning {
            self.warnings += 1;
            events::warning_entered(name, index, estimate);
        }
        self.in_warning = warning;

        Observation {
            index,
            drift,
            warning,
            estimate,
        }
    }

    /// Feed a whole slice, returning how many changes it produced.
    pub fn observe_all(&mut self, values: &[f64]) -> usize {
        let before = self.change_points.len();
        for &v in values {
            self.observe(v);
        }
        self.change_points.len() - before
    }

    /// Number of changes reported so far.
    pub fn num_changes(&self) -> usize {
        self.change_points.len()
    }

    pub fn change_points(&self) -> &[u64] {
        &self.change_points
    }

    /// Times the detector entered its warning zone.
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn detector_name(&self) -> &'static str {
        self.detector.name()
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    pub fn into_inner(self) -> D {
        self.detector
    }

    pub fn summary(&self) -> MonitorReport {
        MonitorReport {
            detector: self.detector.name().to_string(),
            samples: self.samples,
            changes: self.change_points.len(),
            change_points: self.change_points.clone(),
            warnings: self.warnings,
            final_estimate: self.detector.estimate(),
            update_micros: saturating_micros(self.elapsed),
        }
    }

    /// Reset the detector and every counter.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.samples = 0;
        self.change_points.clear();
        self.warnings = 0;
        self.in_warning = false;
        self.elapsed = Duration::ZERO;
    }
}

fn saturating_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}
