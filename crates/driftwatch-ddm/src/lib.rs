//! # driftwatch-ddm
//!
//! DDM (Drift Detection Method) models the errors of an online learner as a
//! binomial process. With `p` the running error rate and
//! `s = sqrt(p(1-p)/n)` its deviation, DDM remembers the point where
//! `p + s` was smallest and signals:
//!
//! ```text
//! warning:  p + s > p_min + 2 * s_min
//! drift:    p + s > p_min + 3 * s_min
//! ```
//!
//! Reference: J. Gama, P. Medas, G. Castillo, P. Rodrigues.
//! "Learning with Drift Detection". SBIA 2004.

pub mod detector;

pub use detector::Ddm;
