use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_FILE, DEFAULT_REFRESH_SECS, DEFAULT_TABLE, ENV_SUPABASE_ANON_KEY, ENV_SUPABASE_URL,
    MIN_REFRESH_SECS,
};
use crate::error::{KalitaError, KalitaResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub supabase_url: Option<String>,
    pub anon_key: Option<String>,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

fn default_table() -> String {
    DEFAULT_TABLE.to_string()
}

fn default_refresh_secs() -> u64 {
    DEFAULT_REFRESH_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            supabase_url: None,
            anon_key: None,
            table: default_table(),
            refresh_secs: default_refresh_secs(),
        }
    }
}

/// Everything needed to reach the live feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub url: String,
    pub anon_key: String,
    pub table: String,
    pub refresh: Duration,
}

pub fn config_path() -> KalitaResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_FILE))
        .ok_or_else(|| KalitaError::ConfigError("could not find home directory".to_string()))
}

pub fn load_config() -> KalitaResult<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> KalitaResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| KalitaError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> KalitaResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> KalitaResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

pub fn resolve_connection(config: &Config) -> KalitaResult<Connection> {
    resolve_connection_with(config, |key| env::var(key).ok())
}

/// Environment values win over the config file.
pub fn resolve_connection_with<F>(config: &Config, lookup: F) -> KalitaResult<Connection>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

    let url = non_empty(lookup(ENV_SUPABASE_URL)).or_else(|| non_empty(config.supabase_url.clone()));
    let anon_key = non_empty(lookup(ENV_SUPABASE_ANON_KEY)).or_else(|| non_empty(config.anon_key.clone()));

    match (url, anon_key) {
        (Some(url), Some(anon_key)) => Ok(Connection {
            url,
            anon_key,
            table: config.table.clone(),
            refresh: Duration::from_secs(config.refresh_secs.max(MIN_REFRESH_SECS)),
        }),
        _ => Err(KalitaError::MissingConfig),
    }
}
