//! Configuration for every detector, loadable from TOML.

pub mod adwin_config;
pub mod ddm_config;
pub mod defaults;
pub mod observability_config;
pub mod volatility_config;

use serde::{Deserialize, Serialize};

pub use adwin_config::AdwinConfig;
pub use ddm_config::DdmConfig;
pub use observability_config::ObservabilityConfig;
pub use volatility_config::VolatilityConfig;

use crate::errors::{DriftwatchError, DriftwatchResult};

/// Top-level configuration. Missing sections fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftwatchConfig {
    pub adwin: AdwinConfig,
    pub ddm: DdmConfig,
    pub volatility: VolatilityConfig,
    pub observability: ObservabilityConfig,
}

impl DriftwatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> DriftwatchResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| DriftwatchError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section, failing on the first violation.
    pub fn validate(&self) -> DriftwatchResult<()> {
        self.adwin.validate()?;
        self.ddm.validate()?;
        self.volatility.validate()
    }
}
