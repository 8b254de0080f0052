use color_eyre::eyre::{self, Context};
use models::{CliConfig, OutputFormat};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::debug;

pub(crate) mod args;
pub(crate) mod commands;
mod emoji;
pub(crate) mod models;

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "cli.toml";
#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "cli.dev.toml";

/// Settings after merging the config file with the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settings {
    pub format: OutputFormat,
    pub lenient_success: bool,
}

impl Settings {
    pub(crate) fn resolve(args: &args::Decode, config: &CliConfig) -> Self {
        Self {
            format: args.format.unwrap_or(config.output.format),
            lenient_success: args.lenient_success || config.decode.lenient_success,
        }
    }
}

fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|path| path.join("dogceo"))
}

fn get_config_file() -> Option<PathBuf> {
    get_config_dir().map(|path| path.join(CONFIG_FILE_NAME))
}

/// Reads the CLI config. A missing config file or directory yields the defaults.
pub(crate) async fn read_cli_config() -> eyre::Result<CliConfig> {
    match get_config_file() {
        Some(path) => read_cli_config_from(&path).await,
        None => Ok(CliConfig::default()),
    }
}

async fn read_cli_config_from(path: &Path) -> eyre::Result<CliConfig> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(CliConfig::default());
        }
        Err(err) => return Err(err).context("unable to read the config file"),
    };
    let config: CliConfig = toml::from_str(&content).context("unable to parse the config file")?;

    Ok(config)
}

/// Reads the whole document from a file, or from stdin when `input` is `-`.
pub(crate) async fn read_input(input: &str) -> eyre::Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("unable to read stdin")?;
        return Ok(buf);
    }

    tokio::fs::read(input)
        .await
        .with_context(|| format!("unable to read {input}"))
}

/// `1 image`, `2 images`. Only regular plurals are needed here.
pub(crate) fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dogceo-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn should_use_defaults_without_config_file() {
        let config = read_cli_config_from(&temp_path("missing.toml")).await.unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.format, OutputFormat::Pretty);
        assert!(!config.decode.lenient_success);
    }

    #[tokio::test]
    async fn should_read_config_file() {
        let path = temp_path("cli.toml");
        tokio::fs::write(&path, "[decode]\nlenient_success = true\n\n[output]\nformat = \"json\"\n")
            .await
            .unwrap();

        let config = read_cli_config_from(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(config.decode.lenient_success);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn should_fail_on_invalid_config_file() {
        let path = temp_path("invalid.toml");
        tokio::fs::write(&path, "[output]\nformat = \"yaml\"\n")
            .await
            .unwrap();

        let res = read_cli_config_from(&path).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert!(res.is_err());
    }

    #[tokio::test]
    async fn should_read_input_file() {
        let path = temp_path("images.json");
        tokio::fs::write(&path, r#"{"message":[],"status":"success"}"#)
            .await
            .unwrap();

        let body = read_input(path.to_str().unwrap()).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(body, br#"{"message":[],"status":"success"}"#);
    }

    #[test]
    fn should_let_flags_override_config() {
        let config = CliConfig {
            output: models::OutputConfig {
                format: OutputFormat::Json,
            },
            ..Default::default()
        };

        let args = args::Decode {
            input: "-".to_string(),
            format: None,
            lenient_success: false,
        };
        assert_eq!(
            Settings::resolve(&args, &config),
            Settings {
                format: OutputFormat::Json,
                lenient_success: false,
            }
        );

        let args = args::Decode {
            input: "-".to_string(),
            format: Some(OutputFormat::Pretty),
            lenient_success: true,
        };
        assert_eq!(
            Settings::resolve(&args, &config),
            Settings {
                format: OutputFormat::Pretty,
                lenient_success: true,
            }
        );
    }

    #[test]
    fn should_pluralize_by_count() {
        assert_eq!(pluralize(0, "image"), "0 images");
        assert_eq!(pluralize(1, "image"), "1 image");
        assert_eq!(pluralize(2, "sub-breed"), "2 sub-breeds");
    }
}
