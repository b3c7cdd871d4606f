use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use elevator::modules;
use elevator::utilities::config::{Args, Config};

fn main() -> anyhow::Result<()> {
    // READ CONFIGURATION
    let args = Args::parse();
    let config = Config::load(&args).context("loading configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    match &config.loaded_from {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => info!("No configuration file provided, using default settings..."),
    }

    modules::run(&config).context("running elevator")?;
    Ok(())
}
