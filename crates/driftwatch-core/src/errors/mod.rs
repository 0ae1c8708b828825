//! Error types shared by every detector crate.

/// Errors raised while building or configuring detectors.
///
/// Detector updates never fail: degenerate numeric states are clamped in
/// place. Only construction, config loading, and report export can error.
#[derive(Debug, thiserror::Error)]
pub enum DriftwatchError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DriftwatchError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type DriftwatchResult<T> = Result<T, DriftwatchError>;
