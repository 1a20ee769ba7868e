#![doc = include_str!("../README.md")]

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::config::{CliArgs, ClientConfig};
use cli::telemetry::init_telemetry;
use snowizard::SnowizardClient;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ClientConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let client = SnowizardClient::new(config.hosts, config.format, config.connect_timeout)?;

    let mut out = io::stdout().lock();
    for _ in 0..config.count {
        let id = client.next_id().context("failed to fetch id")?;
        writeln!(out, "{id}")?;
    }
    out.flush()?;

    Ok(())
}

fn log_startup_info(config: &ClientConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Fetching ids with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Fetching {} {} id(s) from {} host(s)",
            config.count,
            config.format,
            config.hosts.len()
        );
    }
}
