//! Front-end configuration.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, the
//! `SOLOPAY_*` environment variables, command-line flags. Every field is
//! optional in the file.
//!
//! ```toml
//! [estimator]
//! backend = "remote"
//! base_url = "http://localhost:3000/api"
//! latency_ms = 1000
//! timeout_secs = 30
//!
//! [display]
//! currency = "MAD"
//!
//! [logging]
//! level = "info"
//! file = "solopay.log"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use salary_core::EstimatorConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::display::DEFAULT_CURRENCY;

pub const ENV_BACKEND: &str = "SOLOPAY_ESTIMATOR_BACKEND";
pub const ENV_BASE_URL: &str = "SOLOPAY_ESTIMATOR_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EstimatorSection {
    pub backend: String,
    pub base_url: String,
    pub latency_ms: u64,
    pub timeout_secs: u64,
}

impl Default for EstimatorSection {
    fn default() -> Self {
        let defaults = EstimatorConfig::default();
        Self {
            backend: defaults.backend,
            base_url: defaults.base_url,
            latency_ms: defaults.latency.as_millis() as u64,
            timeout_secs: defaults.timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub currency: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Bare level or any `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub estimator: EstimatorSection,
    pub display: DisplaySection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Reads `path` if given, otherwise starts from defaults. Environment
    /// overrides are applied either way.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!(path = %path.display(), "loaded config file");
                Self::from_toml_str(&text)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Applies `SOLOPAY_*` overrides. Blank values are ignored.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(backend) = non_blank(ENV_BACKEND) {
            debug!(%backend, "estimator backend from environment");
            self.estimator.backend = backend.trim().to_lowercase();
        }
        if let Some(url) = non_blank(ENV_BASE_URL) {
            debug!(%url, "estimator url from environment");
            self.estimator.base_url = url.trim().to_string();
        }
    }

    pub fn estimator_config(&self) -> EstimatorConfig {
        EstimatorConfig {
            backend: self.estimator.backend.clone(),
            base_url: self.estimator.base_url.clone(),
            latency: Duration::from_millis(self.estimator.latency_ms),
            timeout: Duration::from_secs(self.estimator.timeout_secs),
        }
    }
}
