//! Provider adapters: map the relay's inbound request onto each upstream API
//! and pass the upstream answer back untouched.
//!
//! Every adapter follows the same three steps: build the provider payload,
//! issue a single HTTPS POST carrying the provider's credential, buffer the
//! response. There is no retry and no response interpretation.
//!
//! # Components
//!
//! - `client`: the shared outbound HTTP client and the send/buffer step.
//! - `anthropic`, `openai`, `google`: per-provider URL, auth and payload.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod anthropic;
mod client;
mod google;
mod openai;

pub use anthropic::ANTHROPIC_VERSION;
pub use client::{ProviderClient, UpstreamResponse};

use std::fmt;

/// Upstream selected by the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Anthropic,
    OpenAi,
    Google,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Anthropic, Provider::OpenAi, Provider::Google];

    /// Resolve a request path (without query string) to its provider.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.path() == path)
    }

    /// Local path the provider is served on.
    pub fn path(&self) -> &'static str {
        match self {
            Provider::Anthropic => "/anthropic",
            Provider::OpenAi => "/openai",
            Provider::Google => "/google",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAi => "openai",
            Provider::Google => "google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
