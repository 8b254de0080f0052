// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use crate::models::responses::{DogCeoResponse, Message, RawMessage, RawResponse};
use crate::models::Status;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

/// Why a document is not an envelope at all
#[derive(thiserror::Error, Debug)]
pub enum MalformedKind {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("`code` is not an integer: {0}")]
    InvalidCode(Value),
    /// Codes are kept as `i64`
    #[error("`code` is out of range: {0}")]
    CodeOutOfRange(Value),
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] MalformedKind),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    /// `message` does not have the shape that `status` requires
    #[error("message does not match status `{status}`: {detail}")]
    PayloadTypeMismatch { status: Status, detail: String },
}

/// Decodes a response body.
#[instrument(level = "DEBUG", skip_all, fields(len = body.len()))]
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<DogCeoResponse<T>, DecodeError> {
    let document = serde_json::from_slice::<Value>(body).map_err(MalformedKind::Json);
    report(document.map_err(DecodeError::from).and_then(validate::<T>))
}

#[instrument(level = "DEBUG", skip_all, fields(len = body.len()))]
pub fn decode_str<T: DeserializeOwned>(body: &str) -> Result<DogCeoResponse<T>, DecodeError> {
    let document = serde_json::from_str::<Value>(body).map_err(MalformedKind::Json);
    report(document.map_err(DecodeError::from).and_then(validate::<T>))
}

/// Decodes an already parsed document.
#[instrument(level = "DEBUG", skip_all)]
pub fn decode_value<T: DeserializeOwned>(
    document: Value,
) -> Result<DogCeoResponse<T>, DecodeError> {
    report(validate(document))
}

/// Decodes a response body into the literal union shape, accepting a `message` of either kind
/// for either status. Envelope errors (`MalformedDocument`, `UnknownStatus`) are reported the
/// same way as [decode].
#[instrument(level = "DEBUG", skip_all, fields(len = body.len()))]
pub fn decode_raw<T: DeserializeOwned>(body: &[u8]) -> Result<RawResponse<T>, DecodeError> {
    let res = serde_json::from_slice::<Value>(body)
        .map_err(|e| DecodeError::from(MalformedKind::Json(e)))
        .and_then(|document| {
            let Envelope {
                code,
                status,
                message,
            } = split_envelope(document)?;
            let kind = kind_of(&message);
            let message: RawMessage<T> =
                serde_json::from_value(message).map_err(|_| DecodeError::PayloadTypeMismatch {
                    status,
                    detail: format!("expected a string or the payload, found {kind}"),
                })?;
            Ok(RawResponse {
                code,
                message,
                status,
            })
        });

    match &res {
        Ok(raw) if raw.is_degenerate_success() => {
            warn! {
                code = ?raw.code,
                "accepted a success response without a payload"
            }
        }
        Ok(raw) => {
            debug! {
                status = %raw.status,
                code = ?raw.code,
                "decoded raw response"
            }
        }
        Err(error) => {
            warn! {
                %error,
                "rejected response document"
            }
        }
    }

    res
}

fn report<T>(
    res: Result<DogCeoResponse<T>, DecodeError>,
) -> Result<DogCeoResponse<T>, DecodeError> {
    match &res {
        Ok(response) => {
            debug! {
                status = %response.status(),
                code = ?response.code,
                "decoded response"
            }
        }
        Err(error) => {
            warn! {
                %error,
                "rejected response document"
            }
        }
    }
    res
}

struct Envelope {
    code: Option<i64>,
    status: Status,
    message: Value,
}

fn split_envelope(document: Value) -> Result<Envelope, DecodeError> {
    let mut object: Map<String, Value> = match document {
        Value::Object(object) => object,
        other => return Err(MalformedKind::NotAnObject(kind_of(&other)).into()),
    };

    let status = object
        .remove("status")
        .ok_or(MalformedKind::MissingField("status"))?;
    let message = object
        .remove("message")
        .ok_or(MalformedKind::MissingField("message"))?;

    // An explicit null is treated like a missing code
    let code = match object.remove("code") {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_i64() {
            Some(code) => Some(code),
            None if value.is_u64() => return Err(MalformedKind::CodeOutOfRange(value).into()),
            None => return Err(MalformedKind::InvalidCode(value).into()),
        },
    };

    let status = match status {
        Value::String(status) => status
            .parse::<Status>()
            .map_err(|e| DecodeError::UnknownStatus(e.0))?,
        other => return Err(DecodeError::UnknownStatus(other.to_string())),
    };

    Ok(Envelope {
        code,
        status,
        message,
    })
}

/// Checks the envelope and the `message` shape that its `status` requires. Does not log.
pub(crate) fn validate<T: DeserializeOwned>(
    document: Value,
) -> Result<DogCeoResponse<T>, DecodeError> {
    let Envelope {
        code,
        status,
        message,
    } = split_envelope(document)?;

    let message = match status {
        Status::Success => {
            let payload: T =
                serde_json::from_value(message).map_err(|e| DecodeError::PayloadTypeMismatch {
                    status,
                    detail: e.to_string(),
                })?;
            Message::Ok(payload)
        }
        Status::Error => match message {
            Value::String(text) => Message::Err(text),
            other => {
                return Err(DecodeError::PayloadTypeMismatch {
                    status,
                    detail: format!("expected a string, found {}", kind_of(&other)),
                })
            }
        },
    };

    Ok(DogCeoResponse { code, message })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
