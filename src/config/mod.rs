// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment};
use std::collections::HashMap;

/// Prefix for relay settings in the environment, e.g. `LLM_RELAY_SERVER__PORT`.
pub const ENV_PREFIX: &str = "LLM_RELAY";

pub const ANTHROPIC_API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

impl AppConfig {
    /// Load configuration from the process environment with precedence:
    /// 1. Provider credentials (`ANTHROPIC_API_KEY`, `OPENAI_API_KEY`, `GOOGLE_API_KEY`)
    /// 2. Prefixed variables (`LLM_RELAY_<SECTION>__<KEY>`)
    /// 3. Defaults (lowest)
    ///
    /// CLI flags are applied on top by the caller.
    pub fn load() -> Result<Self> {
        Self::from_vars(std::env::vars().collect())
    }

    /// Same as [`AppConfig::load`], reading from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let credential = |name: &str| vars.get(name).cloned();

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Override with prefixed environment variables
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars.clone().into_iter().collect())),
            )
            // Credentials use the providers' conventional variable names
            .set_override_option("providers.anthropic.api_key", credential(ANTHROPIC_API_KEY_VAR))?
            .set_override_option("providers.openai.api_key", credential(OPENAI_API_KEY_VAR))?
            .set_override_option("providers.google.api_key", credential(GOOGLE_API_KEY_VAR))?
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))
    }

    /// Names of the credential variables that were not supplied.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            (ANTHROPIC_API_KEY_VAR, &self.providers.anthropic),
            (OPENAI_API_KEY_VAR, &self.providers.openai),
            (GOOGLE_API_KEY_VAR, &self.providers.google),
        ]
        .into_iter()
        .filter(|(_, provider)| provider.api_key.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = AppConfig::from_vars(HashMap::new()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.providers.anthropic.base_url, DEFAULT_ANTHROPIC_BASE_URL);
        assert_eq!(config.providers.openai.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.providers.google.base_url, DEFAULT_GOOGLE_BASE_URL);
        assert!(config.upstream.timeout_seconds.is_none());
        assert!(config.upstream.connect_timeout_seconds.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_credentials_from_provider_variables() {
        let config = AppConfig::from_vars(vars(&[
            ("ANTHROPIC_API_KEY", "sk-ant-123"),
            ("OPENAI_API_KEY", "sk-456"),
            ("GOOGLE_API_KEY", "AIza789"),
        ]))
        .unwrap();

        assert_eq!(config.providers.anthropic.api_key.expose(), "sk-ant-123");
        assert_eq!(config.providers.openai.api_key.expose(), "sk-456");
        assert_eq!(config.providers.google.api_key.expose(), "AIza789");
        assert!(config.missing_credentials().is_empty());
    }

    #[test]
    fn test_missing_credentials_are_not_an_error() {
        let config = AppConfig::from_vars(vars(&[("OPENAI_API_KEY", "sk-456")])).unwrap();

        assert!(config.providers.anthropic.api_key.is_empty());
        assert_eq!(
            config.missing_credentials(),
            vec![ANTHROPIC_API_KEY_VAR, GOOGLE_API_KEY_VAR]
        );
    }

    #[test]
    fn test_prefixed_overrides() {
        let config = AppConfig::from_vars(vars(&[
            ("LLM_RELAY_SERVER__PORT", "8080"),
            ("LLM_RELAY_SERVER__HOST", "127.0.0.1"),
            ("LLM_RELAY_UPSTREAM__TIMEOUT_SECONDS", "60"),
            ("LLM_RELAY_PROVIDERS__OPENAI__BASE_URL", "http://localhost:9999"),
            ("LLM_RELAY_LOGGING__FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.timeout_seconds, Some(60));
        assert_eq!(config.providers.openai.base_url, "http://localhost:9999");
        assert_eq!(config.providers.anthropic.base_url, DEFAULT_ANTHROPIC_BASE_URL);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = AppConfig::from_vars(vars(&[("LLM_RELAY_SERVER__PORT", "not-a-port")]));
        assert!(matches!(result, Err(RelayError::Config(_))));
    }

    #[test]
    fn test_debug_impl_masks_keys() {
        let config = AppConfig::from_vars(vars(&[("ANTHROPIC_API_KEY", "sk-ant-secret")])).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("sk-ant-secret"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("<unset>"));
    }
}
