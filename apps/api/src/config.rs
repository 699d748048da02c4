use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::generation::generator::DEFAULT_GENERATION_TIMEOUT;
use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is optional: without it the service still starts and serves
/// template content. Malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub llm_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let llm_timeout_secs = non_empty("LLM_TIMEOUT_SECS")
            .map(|v| v.trim().parse::<u64>())
            .transpose()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
            .unwrap_or(DEFAULT_GENERATION_TIMEOUT.as_secs());
        if llm_timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            gemini_base_url: non_empty("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_any_variables() {
        let config = config_from(&[]).unwrap();
        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, DEFAULT_MODEL);
        assert_eq!(config.gemini_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]).unwrap();
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("GEMINI_API_KEY", "key"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("LLM_TIMEOUT_SECS", "5"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert_eq!(config.gemini_api_key.as_deref(), Some("key"));
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.llm_timeout, Duration::from_secs(5));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_malformed_numbers_fail() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LLM_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = config_from(&[("LLM_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
