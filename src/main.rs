use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use eventra_lib::bootstrap::{load_config_or_empty, run_launch, tracing::init_tracing_subscriber};

/// Headless Eventra launch: resolve the session and report where the app lands.
#[derive(Debug, Parser)]
#[command(name = "eventra", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_empty(cli.config.as_deref())?;

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    match run_launch(config).await {
        Ok(Some(report)) => {
            info!(?report, "launch routed");
            println!("{:?}", report.destination);
            Ok(())
        }
        Ok(None) => {
            info!("launch interrupted");
            Ok(())
        }
        Err(err) => {
            error!(error = %format!("{err:#}"), "launch failed");
            Err(err)
        }
    }
}
