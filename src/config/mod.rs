use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::error::ScopeError;
use crate::core::output::OutputFormat;
use crate::dns::{default_records, DnsRecord};

pub const DEFAULT_CONFIG_PATH: &str = "config/phishscope.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct DnsConfig {
    /// Records the stub resolver answers with for every hostname.
    #[serde(default = "default_records")]
    pub records: Vec<DnsRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_analyses: usize,
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
    #[serde(default)]
    pub dns: DnsConfig,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            records: default_records(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_concurrent_analyses: default_max_concurrent(),
            default_format: None,
            dns: DnsConfig::default(),
        }
    }
}

fn default_max_concurrent() -> usize {
    8
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig, ScopeError> {
    let path = Path::new(path.unwrap_or(DEFAULT_CONFIG_PATH));

    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ScopeError> {
    let cfg: AppConfig = toml::from_str(content)?;
    if cfg.max_concurrent_analyses == 0 {
        return Err(ScopeError::Config(
            "max_concurrent_analyses must be at least 1".into(),
        ));
    }
    Ok(cfg)
}
