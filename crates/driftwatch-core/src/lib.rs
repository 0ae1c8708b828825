//! # driftwatch-core
//!
//! Foundation crate for the driftwatch detectors.
//! Defines the detector capability trait, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::DriftwatchConfig;
pub use errors::{DriftwatchError, DriftwatchResult};
pub use traits::IDriftDetector;
