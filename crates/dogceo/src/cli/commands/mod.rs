// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use crate::cli::models::OutputFormat;
use crate::cli::{args, emoji, read_cli_config, read_input, Settings};
use color_eyre::eyre::{self, Context};
use console::style;
use dogceo_common::{
    decode, decode_raw, DecodeError, DogCeoResponse, Message, RawMessage, RawResponse, Status,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

pub(crate) mod breeds;
pub(crate) mod images;

pub(crate) enum Decoded<T> {
    Response(DogCeoResponse<T>),
    /// A `success` carrying text. Only produced in lenient mode.
    DegenerateSuccess { code: Option<i64>, text: String },
}

pub(crate) fn decode_document<T: DeserializeOwned>(
    body: &[u8],
    lenient_success: bool,
) -> Result<Decoded<T>, DecodeError> {
    if !lenient_success {
        return decode::<T>(body).map(Decoded::Response);
    }

    match decode_raw::<T>(body)? {
        RawResponse {
            code,
            message: RawMessage::Text(text),
            status: Status::Success,
        } => Ok(Decoded::DegenerateSuccess { code, text }),
        raw => DogCeoResponse::<T>::try_from(raw).map(Decoded::Response),
    }
}

/// How a decoded document ends the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    /// The document was valid but the API reported an error
    ApiError,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::ApiError => ExitCode::FAILURE,
        }
    }
}

/// Reads, decodes and prints one response document. `render` formats the payload for the
/// pretty output.
pub(crate) async fn run<T, F>(args: args::Decode, render: F) -> eyre::Result<ExitCode>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(&T) -> String,
{
    let cli_config = read_cli_config().await?;
    let settings = Settings::resolve(&args, &cli_config);

    let body = read_input(&args.input).await?;
    let decoded = decode_document::<T>(&body, settings.lenient_success)
        .with_context(|| format!("unable to decode the response document from {}", args.input))?;

    let outcome = present(
        decoded,
        &settings,
        render,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(outcome.into())
}

/// Writes the decoded document to `out`, and notices about it to `err`.
pub(crate) fn present<T, F, O, E>(
    decoded: Decoded<T>,
    settings: &Settings,
    render: F,
    out: &mut O,
    err: &mut E,
) -> eyre::Result<Outcome>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
    O: Write,
    E: Write,
{
    match decoded {
        Decoded::Response(response) => {
            if settings.format == OutputFormat::Json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            }

            match (&response.message, settings.format) {
                (Message::Ok(payload), OutputFormat::Pretty) => {
                    write!(out, "{}", render(payload))?;
                    Ok(Outcome::Success)
                }
                (Message::Ok(_), OutputFormat::Json) => Ok(Outcome::Success),
                (Message::Err(message), _) => {
                    let headline = match response.code {
                        Some(code) => format!("The API reported an error ({code})"),
                        None => "The API reported an error".to_string(),
                    };
                    writeln!(
                        err,
                        "  {} {}: {}",
                        emoji::CROSS_MARK,
                        style(headline).red().bold(),
                        message
                    )?;
                    Ok(Outcome::ApiError)
                }
            }
        }
        Decoded::DegenerateSuccess { code, text } => {
            writeln!(
                err,
                "  {} {}",
                emoji::WARNING,
                style("The response declared success but carried no payload").yellow()
            )?;
            match settings.format {
                OutputFormat::Pretty => writeln!(out, "{text}")?,
                OutputFormat::Json => {
                    let raw: RawResponse<T> = RawResponse {
                        code,
                        message: RawMessage::Text(text),
                        status: Status::Success,
                    };
                    writeln!(out, "{}", serde_json::to_string_pretty(&raw)?)?;
                }
            }
            Ok(Outcome::Success)
        }
    }
}
