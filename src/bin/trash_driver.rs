//! trash-driver
//!
//! Sends a list of post URLs to a trash-by-url server in batches and prints
//! one result line per URL.

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use trash_by_url::driver::{
    AjaxTransport, AutoConfirm, BatchDriver, Confirm, DriverError, Result, RunStatus, StdinConfirm,
    TerminalView, TransportConfig,
};

#[derive(Parser, Debug)]
#[command(name = "trash-driver")]
#[command(version, about = "Move posts to trash by URL, in batches", long_about = None)]
struct Cli {
    /// Base URL of the trash-by-url server
    #[arg(short, long, env = "TRASH_SERVER", default_value = "http://127.0.0.1:8000")]
    server: String,

    /// Operator API key
    #[arg(short = 'k', long, env = "TRASH_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Header carrying the API key
    #[arg(long, default_value = "X-Api-Key")]
    api_key_header: String,

    /// File with one URL per line; reads stdin when omitted
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// URLs per request; defaults to the size the server suggests
    #[arg(short, long)]
    batch_size: Option<usize>,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => eprintln!("Warning: failed to load .env: {}", e),
        _ => {}
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(RunStatus::Completed) => ExitCode::SUCCESS,
        Ok(RunStatus::Halted { .. }) => ExitCode::FAILURE,
        Err(DriverError::Declined) => {
            eprintln!("Aborted.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<RunStatus> {
    let mut confirm = confirmation(&cli)?;

    let text = match &cli.file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut config = TransportConfig::new(cli.server, cli.api_key)
        .with_timeout(Duration::from_secs(cli.timeout));
    config.api_key_header = cli.api_key_header;

    let transport = AjaxTransport::connect(config).await?;
    let batch_size = cli.batch_size.unwrap_or_else(|| transport.batch_size());
    let driver = BatchDriver::new(transport, batch_size);

    let mut view = TerminalView::new(std::io::stdout());
    let summary = driver.run(&text, confirm.as_mut(), &mut view).await?;

    eprintln!(
        "{} URLs, {}/{} batches sent",
        summary.urls, summary.batches_sent, summary.batches_total
    );
    Ok(summary.status)
}

/// With the list on stdin there is no terminal left to answer a prompt
fn confirmation(cli: &Cli) -> Result<Box<dyn Confirm>> {
    if cli.yes {
        Ok(Box::new(AutoConfirm(true)))
    } else if cli.file.is_none() {
        Err(DriverError::Config(
            "--yes is required when URLs are read from stdin".to_string(),
        ))
    } else {
        Ok(Box::new(StdinConfirm))
    }
}
