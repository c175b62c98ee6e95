//! # Configuration
//!
//! Explicit, validated configuration for the orchestration core. Defaults are
//! declared in code and overridden through `DASHBOARD_`-prefixed environment
//! variables; invalid values surface as [`ConfigError`] instead of silently
//! falling back.
//!
//! ## Usage
//!
//! ```rust
//! use dashboard_core::config::RouterConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RouterConfig::from_env()?;
//! assert!(config.outcome_capacity > 0);
//! # Ok(())
//! # }
//! ```

use config::{Config, Environment};
use serde::Deserialize;
use thiserror::Error;

/// Error raised when configuration cannot be loaded or deserialized
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration load failed: {0}")]
    Load(#[from] config::ConfigError),
}

/// Tunables for the intent router and its outcome channel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// Capacity of the broadcast channel carrying outcome signals
    pub outcome_capacity: usize,
    /// Whether `run` joins in-flight pipelines after the intent stream ends
    pub drain_on_shutdown: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            outcome_capacity: 1024,
            drain_on_shutdown: true,
        }
    }
}

impl RouterConfig {
    /// Load configuration from defaults overridden by `DASHBOARD_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("outcome_capacity", 1024i64)?
            .set_default("drain_on_shutdown", true)?
            .add_source(Environment::with_prefix("DASHBOARD").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
