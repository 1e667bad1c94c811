//! Main entry point for the rip-probe CLI tool

use clap::Parser;
use log::{error, info};
use rip_probe::cli::Cli;
use rip_probe::AppConfig;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Load configuration
    let loaded = match cli.config_path() {
        Some(path) => AppConfig::load_from(&path),
        None => AppConfig::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });
    cli.apply(&mut config);

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.global.log_filter()),
    )
    .init();

    info!("Starting rip-probe v{}", env!("CARGO_PKG_VERSION"));

    // Execute CLI logic
    if let Err(e) = cli.run(config).await {
        error!("Probe failed: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
