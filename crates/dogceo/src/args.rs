use clap_derive::{Parser, Subcommand};

/// Inspect responses returned by the Dog CEO image API
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(propagate_version = true)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Decode an image list response
    Images(crate::cli::args::Decode),
    /// Decode a breeds list response
    Breeds(crate::cli::args::Decode),
}
