//! Binary crate for the `skycast` command-line dashboards.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive city prompt and configuration
//! - Rendering the plain and vista dashboards

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cmd = cli::Cli::parse();

    // Logs go to stderr so the dashboard on stdout stays clean.
    let default_filter = if cmd.verbose { "skycast_core=debug,skycast=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cmd.run().await
}
