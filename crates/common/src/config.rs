use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenRouteService API key. Required; there is no default on purpose —
    /// the credential lives in the environment, never in the source.
    pub ors_api_key: String,
    #[serde(default = "default_ors_base_url")]
    pub ors_base_url: String,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_ors_base_url() -> String {
    "https://api.openrouteservice.org".to_string()
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        // Parse environment variables into the Config struct
        envy::from_env().context("Failed to load config from environment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_optional_fields() {
        let config: Config =
            envy::from_iter([("ORS_API_KEY".to_string(), "test-key".to_string())]).unwrap();

        assert_eq!(config.ors_api_key, "test-key");
        assert_eq!(config.ors_base_url, "https://api.openrouteservice.org");
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let result: std::result::Result<Config, _> =
            envy::from_iter(std::iter::empty::<(String, String)>());
        assert!(result.is_err());
    }
}
