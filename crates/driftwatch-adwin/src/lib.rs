//! # driftwatch-adwin
//!
//! ADWIN (ADaptive WINdowing): keeps the longest recent window whose mean is
//! statistically consistent with "no change", and shrinks it when a cut
//! test finds two sub-windows with significantly different means.
//!
//! The window is summarized by an [`ExponentialHistogram`] so memory stays
//! logarithmic in the window width.
//!
//! Reference: A. Bifet, R. Gavaldà. "Learning from Time-Changing Data with
//! Adaptive Windowing". SIAM SDM 2007.

pub mod histogram;
pub mod window;

pub use histogram::{bucket_size, Bucket, ExponentialHistogram};
pub use window::AdaptiveWindow;
