// llm-relay - CORS-friendly HTTP relay to the Anthropic, OpenAI and Google LLM APIs
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use llm_relay::cli::Args;
use llm_relay::config::AppConfig;
use llm_relay::providers::Provider;
use llm_relay::server::create_router;
use llm_relay::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration (credentials are read once, here)
    let mut config = AppConfig::load()?;
    args.apply(&mut config);

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting llm-relay v{}", env!("CARGO_PKG_VERSION"));

    for name in config.missing_credentials() {
        warn!("{} is not set; requests to that provider will be rejected upstream", name);
    }
    if config.upstream.timeout_seconds.is_none() {
        info!("No upstream timeout configured; slow providers hold requests open");
    }

    // Phase 3: Build and start HTTP server
    let app = create_router(&config)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    for provider in Provider::ALL {
        info!("  POST {} -> {}", provider.path(), provider);
    }
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 4: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
