//! CLI type definitions
//!
//! This module contains the clap command structure for the launcher binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Launcher command line interface.
#[derive(Parser, Debug)]
#[command(name = "nanobot-launcher")]
#[command(about = "Bootstrap the environment and exec the nanobot gateway", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print the planned environment mutation and exec target, then exit
    /// without starting the gateway
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (takes priority over RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the tracing filter for this invocation.
    ///
    /// `--verbose` always means debug, even when `RUST_LOG` is set;
    /// otherwise `RUST_LOG` applies, falling back to "info".
    pub fn log_filter(&self) -> EnvFilter {
        if self.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        }
    }
}
