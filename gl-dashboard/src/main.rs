//! gl-dashboard - Green Ledger role dashboards in the terminal
//!
//! ```bash
//! gl-dashboard --latency-ms 0
//! gl> login alice@farm.io secret producer
//! gl> open /buyer
//! gl> logout
//! ```

use gl_auth::{SessionStore, SimulatedLatency};
use gl_config::Config;
use gl_dashboard::{Cli, DashboardError, DashboardResult, Shell, logger};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gl-dashboard: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DashboardResult<()> {
    let cli = Cli::parse();

    // Load and validate configuration
    let mut config = Config::load()?;
    cli.apply(&mut config);
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(parent) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| DashboardError::Io {
            message: format!("Failed to create log directory {}", parent.display()),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting gl-dashboard v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let session = SessionStore::with_latency(SimulatedLatency::new(config.session.latency()));
    let mut shell = Shell::new(session);

    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    info!("Session closed");
    Ok(())
}
