// CLI module for llm-relay
// Author: kelexine (https://github.com/kelexine)

use crate::config::AppConfig;
use clap::Parser;

/// llm-relay - CORS-friendly HTTP relay to the Anthropic, OpenAI and Google LLM APIs
#[derive(Parser, Debug, Default)]
#[command(name = "llm-relay", version, about, long_about = None)]
pub struct Args {
    /// Address to bind (overrides LLM_RELAY_SERVER__HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides LLM_RELAY_SERVER__PORT)
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    /// Apply command-line overrides, which take precedence over the environment.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from(["llm-relay", "--port", "8081", "--host", "127.0.0.1"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_no_flags_keep_config() {
        let args = Args::parse_from(["llm-relay"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
