use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;
use std::collections::HashMap;

/// Default credential entries, `token:tier` pairs separated by commas.
const DEFAULT_API_KEYS: &str =
    "PREMIUM_KEY_A1B2C3D4:Premium Client Tier,BASIC_KEY_E5F6G7H8:Basic Client Tier";

const DEFAULT_DATA_FILE: &str = "transactions.csv";

#[derive(Debug, Clone)]
pub struct DataConfig {
    pub common: core_config::Config,
    /// Path to the delimited source file loaded once at startup.
    pub data_file: String,
    /// Static credential map: bearer token -> tier label.
    pub api_keys: HashMap<String, String>,
}

impl DataConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        let data_file = get_env("DATA_FILE", Some(DEFAULT_DATA_FILE), is_prod)?;
        let raw_keys = get_env("DATA_API_KEYS", Some(DEFAULT_API_KEYS), is_prod)?;

        Ok(DataConfig {
            common,
            data_file,
            api_keys: parse_api_keys(&raw_keys)?,
        })
    }
}

fn parse_api_keys(raw: &str) -> Result<HashMap<String, String>, AppError> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            entry
                .split_once(':')
                .map(|(token, tier)| (token.trim().to_string(), tier.trim().to_string()))
                .ok_or_else(|| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "Malformed API key entry {:?}, expected token:tier",
                        entry
                    ))
                })
        })
        .collect()
}
