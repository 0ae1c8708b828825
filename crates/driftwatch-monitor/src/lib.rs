//! # driftwatch-monitor
//!
//! Consumer-side plumbing around the detectors: a [`DriftMonitor`] that
//! counts and logs the changes a detector reports, a parallel
//! [`run_ensemble`] that drives several independent detectors over the same
//! stream, and the tracing setup they log through.

pub mod ensemble;
pub mod monitor;
pub mod report;
pub mod tracing_setup;

pub use ensemble::run_ensemble;
pub use monitor::{DriftMonitor, Observation};
pub use report::MonitorReport;
