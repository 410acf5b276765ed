//! Configuration data structures for the relay.
//!
//! This module defines the schema for the application settings: the listening
//! socket, the three upstream providers and their credentials, outbound
//! timeouts, and logging.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream provider endpoints and credentials.
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Outbound HTTP client settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging and output format settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3000`
    #[serde(default = "default_port")]
    pub port: u16,
}

/// The three providers the relay can forward to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "ProviderConfig::anthropic")]
    pub anthropic: ProviderConfig,

    #[serde(default = "ProviderConfig::openai")]
    pub openai: ProviderConfig,

    #[serde(default = "ProviderConfig::google")]
    pub google: ProviderConfig,
}

/// Endpoint and credential for a single upstream provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Scheme and authority of the provider API, without a trailing path.
    pub base_url: String,

    /// Credential sent to the provider. Empty when the hosting environment
    /// does not supply one.
    #[serde(default)]
    pub api_key: ApiKey,
}

/// Settings for the outbound HTTP client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Total request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,

    /// Connection establishment timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Provider credential, wiped from memory on drop.
///
/// The secret never appears in `Debug` output and is never serialized, so a
/// dumped configuration cannot leak it.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw secret, for building the outbound request only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Custom Debug impl that never logs the key
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("ApiKey(<unset>)")
        } else {
            f.write_str("ApiKey([REDACTED])")
        }
    }
}

impl Serialize for ApiKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("")
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ApiKey)
    }
}

impl ProviderConfig {
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: ApiKey::default(),
        }
    }

    pub fn anthropic() -> Self {
        Self::with_base_url(DEFAULT_ANTHROPIC_BASE_URL)
    }

    pub fn openai() -> Self {
        Self::with_base_url(DEFAULT_OPENAI_BASE_URL)
    }

    pub fn google() -> Self {
        Self::with_base_url(DEFAULT_GOOGLE_BASE_URL)
    }
}

// Default trait implementations linking to custom logic

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            anthropic: ProviderConfig::anthropic(),
            openai: ProviderConfig::openai(),
            google: ProviderConfig::google(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// Helper functions for serde defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
