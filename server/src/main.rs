//! Entry point for the table server.

use holdem_server::config::Config;
use holdem_server::server::{run_server, AppState};

use anyhow::Context;
use clap::Parser;
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;

/// Per-table deterministic Hold'em server.
#[derive(Parser, Debug)]
#[command(name = "holdem-server")]
struct ServerCli {
    /// Path to the TOML config file (created with defaults if missing).
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Persist CLI overrides back to the config file.
    #[arg(long, default_value_t = false)]
    persist: bool,

    /// Override the default min bet / big blind for newly created tables.
    #[arg(long)]
    min_bet: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = ServerCli::parse();

    let mut cfg = Config::load_or_create(&cli.config)
        .with_context(|| format!("loading or creating config '{}'", cli.config.display()))?;

    if let Some(min_bet) = cli.min_bet {
        cfg.min_bet = min_bet;
    }
    if cli.persist {
        cfg.save(&cli.config)
            .with_context(|| format!("saving updated config '{}'", cli.config.display()))?;
    }

    let port = find_available_port(cfg.port)
        .with_context(|| format!("no available port at or after {}", cfg.port))?;
    if port != cfg.port {
        tracing::warn!(requested = cfg.port, port, "requested port unavailable, using alternative");
    }
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let state = AppState::new(&cfg);

    tracing::info!(%addr, min_bet = cfg.min_bet, "starting table server");
    run_server(addr, state).await
}

fn find_available_port(start_port: u16) -> anyhow::Result<u16> {
    for port in start_port..start_port.saturating_add(100) {
        if TcpListener::bind(("127.0.0.1", port)).is_ok() {
            return Ok(port);
        }
    }
    Err(anyhow::anyhow!(
        "no available ports found in range {}..{}",
        start_port,
        start_port.saturating_add(100)
    ))
}
