// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use clap::Parser;
use color_eyre::eyre;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

#[tokio::main]
async fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Images(args) => cli::commands::images::main(args).await,
        args::Commands::Breeds(args) => cli::commands::breeds::main(args).await,
    }
}
