//! Structured log events for detector outcomes.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a confirmed drift.
pub fn drift_detected(detector: &str, index: u64, estimate: f64) {
    tracing::info!(
        event = "drift_detected",
        detector = %detector,
        index = index,
        estimate = estimate,
        "drift detected"
    );
}

/// Log a detector entering its warning zone.
pub fn warning_entered(detector: &str, index: u64, estimate: f64) {
    tracing::warn!(
        event = "warning_entered",
        detector = %detector,
        index = index,
        estimate = estimate,
        "detector entered warning zone"
    );
}

/// Log the end of a monitored run.
pub fn run_completed(detector: &str, samples: u64, changes: usize) {
    tracing::info!(
        event = "run_completed",
        detector = %detector,
        samples = samples,
        changes = changes,
        "monitored run completed"
    );
}

/// Log a shift in the rate at which an inner detector fires.
pub fn volatility_shift(detector: &str, index: u64) {
    tracing::warn!(
        event = "volatility_shift",
        detector = %detector,
        index = index,
        "drift rate shifted"
    );
}
