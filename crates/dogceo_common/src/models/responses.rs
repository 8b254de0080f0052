// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

use crate::decode::{self, DecodeError};
use crate::models::{BreedsList, Images, Status};
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The message of a validated response. The variant is what the envelope's `status` declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<T> {
    Ok(T),
    Err(String),
}

/// A response envelope whose `message` has been checked against its `status`.
///
/// Deserializing this type performs the same validation as [decode::decode_value]; a document
/// that would be rejected there fails to deserialize here. Serializing produces the wire shape,
/// omitting `code` when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogCeoResponse<T> {
    pub code: Option<i64>,
    pub message: Message<T>,
}

pub type ImagesResponse = DogCeoResponse<Images>;
pub type BreedsListResponse = DogCeoResponse<BreedsList>;

/// The failure side of a response, split off by [DogCeoResponse::into_result].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub code: Option<i64>,
    pub message: String,
}

impl<T> DogCeoResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            code: None,
            message: Message::Ok(payload),
        }
    }

    pub fn error<S: Into<String>>(message: S, code: Option<i64>) -> Self {
        Self {
            code,
            message: Message::Err(message.into()),
        }
    }

    pub fn status(&self) -> Status {
        match self.message {
            Message::Ok(_) => Status::Success,
            Message::Err(_) => Status::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.message, Message::Ok(_))
    }

    pub fn code(&self) -> Option<i64> {
        self.code
    }

    pub fn payload(&self) -> Option<&T> {
        match &self.message {
            Message::Ok(payload) => Some(payload),
            Message::Err(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.message {
            Message::Ok(_) => None,
            Message::Err(message) => Some(message),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self.message {
            Message::Ok(payload) => Ok(payload),
            Message::Err(message) => Err(ApiError {
                code: self.code,
                message,
            }),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for DogCeoResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = serde_json::Value::deserialize(deserializer)?;
        decode::validate(document).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for DogCeoResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.code.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("DogCeoResponse", len)?;
        match self.code {
            Some(code) => state.serialize_field("code", &code)?,
            None => state.skip_field("code")?,
        }
        match &self.message {
            Message::Ok(payload) => state.serialize_field("message", payload)?,
            Message::Err(message) => state.serialize_field("message", message)?,
        }
        state.serialize_field("status", &self.status())?;
        state.end()
    }
}

/// The envelope exactly as the API declares it: `message` is either text or the payload,
/// whatever `status` says. Use [DogCeoResponse] unless the degenerate cases matter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub message: RawMessage<T>,
    pub status: Status,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RawMessage<T> {
    Text(String),
    Payload(T),
}

impl<T> RawResponse<T> {
    /// A `success` whose message is plain text. Some endpoints have been seen to answer this way.
    pub fn is_degenerate_success(&self) -> bool {
        self.status == Status::Success && matches!(self.message, RawMessage::Text(_))
    }
}

impl<T> TryFrom<RawResponse<T>> for DogCeoResponse<T> {
    type Error = DecodeError;

    fn try_from(raw: RawResponse<T>) -> Result<Self, Self::Error> {
        let message = match (raw.status, raw.message) {
            (Status::Success, RawMessage::Payload(payload)) => Message::Ok(payload),
            (Status::Error, RawMessage::Text(message)) => Message::Err(message),
            (Status::Success, RawMessage::Text(_)) => {
                return Err(DecodeError::PayloadTypeMismatch {
                    status: Status::Success,
                    detail: "expected the payload, found a string".to_string(),
                })
            }
            (Status::Error, RawMessage::Payload(_)) => {
                return Err(DecodeError::PayloadTypeMismatch {
                    status: Status::Error,
                    detail: "expected a string, found the payload".to_string(),
                })
            }
        };

        Ok(DogCeoResponse {
            code: raw.code,
            message,
        })
    }
}
