//! Structured logging and credential-redaction utilities.
//!
//! This module configures the `tracing` ecosystem for the application,
//! supporting multiple output formats and providing a helper that keeps
//! provider API keys out of log lines and relayed error messages.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{RelayError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports three output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `compact`: Single-line human-readable output.
/// - `pretty` (default): Multi-line, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| RelayError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format.as_str() {
        "json" => registry.with(tracing_subscriber::fmt::layer().json()).try_init(),
        "compact" => registry.with(tracing_subscriber::fmt::layer().compact()).try_init(),
        _ => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| RelayError::Internal(format!("Failed to initialize logging: {}", e)))
}

/// Credential prefixes used by the supported providers.
/// Anthropic keys (`sk-ant-`) are covered by `sk-`.
const KEY_PREFIXES: [&str; 2] = ["sk-", "AIza"];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '&' | ',' | ')' | ']' | '}')
}

/// Replace every occurrence of a secret that starts at `marker`.
/// When `keep_marker` is set only the text after the marker is replaced.
fn redact(input: &str, marker: &str, keep_marker: bool, replacement: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find(marker) {
        // Prefixes only count at the start of a word ("task-" is not a key)
        let mid_word = !keep_marker
            && rest[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric());
        if mid_word {
            result.push_str(&rest[..pos + marker.len()]);
            rest = &rest[pos + marker.len()..];
            continue;
        }

        let secret_start = pos + if keep_marker { marker.len() } else { 0 };
        let after_marker = &rest[pos + marker.len()..];
        let secret_len = after_marker.find(is_delimiter).unwrap_or(after_marker.len());

        result.push_str(&rest[..secret_start]);
        if secret_len > 0 {
            result.push_str(replacement);
        } else if !keep_marker {
            result.push_str(marker);
        }
        rest = &after_marker[secret_len..];
    }

    result.push_str(rest);
    result
}

/// Sanitizes provider credentials from log messages.
///
/// Scans for `key=` query parameters (Google passes its key in the URL) and
/// for the OpenAI, Anthropic and Google key prefixes, replacing each secret
/// with a `\[REDACTED\]` placeholder.
pub fn sanitize(input: &str) -> String {
    let mut result = redact(input, "key=", true, "[REDACTED]");
    for prefix in KEY_PREFIXES {
        result = redact(&result, prefix, false, "[REDACTED_API_KEY]");
    }
    result
}
