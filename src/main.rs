use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sample_tracker::{run_server, util, Config, ServerConfig, WebAppState};

/// Laboratory sample intake form served to the browser.
#[derive(Debug, Parser)]
#[command(name = "sample-tracker", version, about)]
struct Cli {
    /// Directory for the config file and logs (default: ~/.sample-tracker)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of <data-dir>/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overriding the config file
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (~/.sample-tracker/logs/sample-tracker.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let server_config = ServerConfig::from(&config);
    println!(
        "Sample Tracker running at http://{}:{} (logs: {})",
        server_config.host,
        server_config.port,
        util::log_file_path().display()
    );

    run_server(WebAppState::new(config), server_config).await
}
