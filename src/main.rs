use anyhow::Context;
use clap::Parser;

use contactform::cli::Cli;
use contactform::config::Config;
use contactform::logging::init_tracing;
use contactform::submit::FormRelay;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = cli.endpoint {
        config.endpoint.url = endpoint;
        config.validate()?;
    }

    let log_path = cli
        .log_file
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(Config::default_log_path);
    init_tracing(&log_path, &config.logging.level)?;

    let relay = FormRelay::new(&config.endpoint)?;
    tracing::info!(endpoint = %relay.endpoint(), "Starting contact form");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    contactform::ui::run(relay, runtime.handle().clone())?;
    Ok(())
}
