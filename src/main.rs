//! Nanobot launcher entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nanobot_launcher::cli::Cli;
use nanobot_launcher::launcher::{self, exec};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(cli.log_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let plan = launcher::plan_from_env().context("Failed to plan gateway launch")?;

    if cli.dry_run {
        println!("{}", plan.describe());
        return Ok(());
    }

    // Only returns on failure; on success the gateway owns this process.
    Err(exec::exec_gateway(&plan).into())
}
