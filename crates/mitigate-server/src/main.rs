use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use mitigate_server::cli::Cli;
use mitigate_server::{AppState, serve};

mod bootstrap;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("mitigate error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let service = bootstrap::open_store(&config).await?;
    if config.store.normalize_on_startup {
        bootstrap::normalize(&service).await?;
    } else {
        tracing::info!("citizen_id normalization skipped");
    }

    let address = config.server.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    serve(listener, AppState::new(service, config))
        .await
        .context("server terminated unexpectedly")
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MITIGATE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
