use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use salary_server::ServerConfig;
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Stand-in calculator service for the SoloPay salary estimator.
#[derive(Debug, Parser)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Artificial delay added to every calculation, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    latency_ms: u64,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Honours `RUST_LOG`; falls back to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = ServerConfig::new()
        .with_bind_addr_str(&cli.bind)?
        .with_latency(Duration::from_millis(cli.latency_ms));

    salary_server::serve(config)
        .await
        .context("calculator service stopped with an error")?;

    Ok(())
}
