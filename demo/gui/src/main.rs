//! Palindrome Benchmark TUI
//!
//! Terminal front-end for the iterative-vs-recursive palindrome benchmark.

use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use bench_client::api_client::ApiClient;
use bench_client::config::{build_config, CliArgs as ConfigCliArgs};
use clap::Parser;
use demo_gui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Palindrome Benchmark TUI - compare iterative and recursive search
#[derive(Parser, Debug)]
#[command(name = "bench-tui")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Benchmark server base URL (BENCH_SERVER_URL is read by the config layer)
    #[arg(long)]
    server_url: Option<String>,

    /// Benchmark endpoint path
    #[arg(long)]
    endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long, env = "BENCH_LOG_FILE", value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Write the live chart as Chart.js JSON here after every run
    #[arg(long, value_name = "FILE")]
    export_chart: Option<PathBuf>,
}

impl From<&Args> for ConfigCliArgs {
    fn from(args: &Args) -> Self {
        ConfigCliArgs {
            config_file: args.config.clone(),
            server_url: args.server_url.clone(),
            endpoint: args.endpoint.clone(),
            log_level: args.log_level.clone(),
        }
    }
}

/// The terminal owns stdout, so logs only go to a file.
fn init_tracing(log_level: &str, log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&ConfigCliArgs::from(&args))?;

    init_tracing(config.log_level.as_filter_str(), args.log_file.as_ref())?;

    tracing::info!("Palindrome Benchmark TUI v{}", bench_client::VERSION);
    tracing::info!(
        server_url = %config.server_url,
        endpoint = %config.endpoint,
        "Configuration loaded"
    );

    let api = Arc::new(ApiClient::from_config(&config));
    let mut screen = BenchmarkScreen::new(&config, api);
    if let Some(path) = args.export_chart {
        screen = screen.with_chart_export(path);
    }

    let mut app = TuiApp::new(screen)?;
    app.run().await?;

    Ok(())
}
