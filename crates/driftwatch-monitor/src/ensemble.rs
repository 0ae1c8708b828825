//! Parallel evaluation of independent detectors over one stream.

use rayon::prelude::*;

use driftwatch_core::IDriftDetector;

use crate::monitor::DriftMonitor;
use crate::report::MonitorReport;
use crate::tracing_setup::events;

/// Drive every detector over `stream` on the rayon pool and collect one
/// report per detector, in input order.
///
/// Each detector is owned by exactly one task, so its updates stay
/// sequential while different detectors run concurrently.
pub fn run_ensemble<D>(detectors: Vec<D>, stream: &[f64]) -> Vec<MonitorReport>
where
    D: IDriftDetector,
{
    detectors
        .into_par_iter()
        .map(|detector| {
            let mut monitor = DriftMonitor::new(detector);
            monitor.observe_all(stream);
            let report = monitor.summary();
            events::run_completed(&report.detector, report.samples, report.changes);
            report
        })
        .collect()
}
