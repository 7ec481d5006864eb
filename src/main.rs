//! trash-by-url admin server
//!
//! Serves the operator page and the batch trash endpoint.

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use trash_by_url::Result;
use tracing_subscriber::EnvFilter;
use trash_by_url::config::{Config, DEFAULT_CONFIG_PATH};
use trash_by_url::server;

#[derive(Parser, Debug)]
#[command(name = "trash-server")]
#[command(version, about = "Admin server for trashing posts by URL", long_about = None)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "TRASH_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the listen address
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => eprintln!("Warning: failed to load .env: {}", e),
        _ => {}
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the multi-line bind hints readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// File, then environment, then command-line overrides
async fn load_config(cli: &Cli) -> Result<Config> {
    info!("📄 Loading configuration file: {:?}", cli.config);
    let mut config = Config::load(&cli.config).await?;

    if let Some(host) = &cli.host {
        config.service.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.service.server.port = port;
    }

    config.validate()?;
    Ok(config)
}
