use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub(crate) struct CliConfig {
    pub decode: DecodeConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub(crate) struct DecodeConfig {
    /// Treat a `success` with a text message as a valid, empty success
    pub lenient_success: bool,
}

#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub(crate) struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human readable listing
    #[default]
    Pretty,
    /// The envelope in its wire shape
    Json,
}
