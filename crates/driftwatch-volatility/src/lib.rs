//! # driftwatch-volatility
//!
//! Relative stream-volatility detection. Each time the inner detector fires,
//! the number of samples since its previous drift becomes an interval
//! observation. Recent intervals sit in a sliding [`Buffer`]; intervals that
//! slide out are sampled into a [`Reservoir`] standing for the long-run
//! state. A volatility shift is reported when the ratio of their standard
//! deviations leaves `[1 - confidence, 1 + confidence]`.
//!
//! Reference: D. T. J. Huang, Y. S. Koh, G. Dobbie, R. Pears.
//! "Detecting Volatility Shift in Data Streams". ICDM 2014.

pub mod buffer;
pub mod detector;
pub mod reservoir;

pub use buffer::Buffer;
pub use detector::VolatilityDetector;
pub use reservoir::Reservoir;

use driftwatch_core::config::defaults::STDDEV_FLOOR;

/// Population standard deviation of `values` around `mean`, floored at
/// [`STDDEV_FLOOR`] so it can divide safely.
pub(crate) fn floored_stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return STDDEV_FLOOR;
    }
    let sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    let stddev = (sq / values.len() as f64).sqrt();
    if stddev > 0.0 {
        stddev
    } else {
        STDDEV_FLOOR
    }
}
