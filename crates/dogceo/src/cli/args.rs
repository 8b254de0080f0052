use crate::cli::models::OutputFormat;
use clap_derive::Parser;

#[derive(Parser, Debug)]
pub(crate) struct Decode {
    /// The saved response document, or `-` for stdin
    #[arg(default_value = "-", value_name = "FILE")]
    pub(crate) input: String,

    /// Output format. Overrides the config file
    #[arg(env = "DOGCEO_FORMAT", long, value_enum)]
    pub(crate) format: Option<OutputFormat>,

    /// Accept `success` responses whose message is plain text instead of the payload
    #[arg(env = "DOGCEO_LENIENT_SUCCESS", long)]
    pub(crate) lenient_success: bool,
}
