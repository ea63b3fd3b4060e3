use crate::display::DEFAULT_TOP_K;
use crate::model::{ConfigError, SearchQuery};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SupplierConfig {
    Fixture {
        path: String,
    },
    Http {
        base_url: String,
        #[serde(default = "default_timeout_seconds")]
        timeout_seconds: u64,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub supplier: SupplierConfig,
    #[serde(default)]
    pub query: SearchQuery,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn max_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    config.max_level()?;
    Ok(config)
}
