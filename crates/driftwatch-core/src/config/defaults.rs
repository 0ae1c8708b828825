// Single source of truth for all default values.

// --- ADWIN ---
pub const DEFAULT_ADWIN_DELTA: f64 = 0.01;
pub const DEFAULT_MAX_BUCKETS: usize = 5;
pub const DEFAULT_MIN_CLOCK: u64 = 1;
pub const DEFAULT_MIN_WINDOW_LENGTH: u64 = 16;
/// Smallest sub-window either side of a candidate cut.
pub const MIN_SUBWINDOW_LENGTH: u64 = 5;

// --- DDM ---
pub const DEFAULT_DDM_MIN_NUM_INSTANCES: u64 = 30;
pub const DEFAULT_DDM_WARNING_LEVEL: f64 = 2.0;
pub const DEFAULT_DDM_DRIFT_LEVEL: f64 = 3.0;

// --- Volatility ---
pub const DEFAULT_VOLATILITY_SIZE: usize = 32;
pub const DEFAULT_VOLATILITY_CONFIDENCE: f64 = 0.05;
/// Floor for buffer/reservoir standard deviations, keeps the relative-variance ratio finite.
pub const STDDEV_FLOOR: f64 = 1e-11;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
pub const LOG_ENV_VAR: &str = "DRIFTWATCH_LOG";
