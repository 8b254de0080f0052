// SPDX-License-Identifier: AGPL-3.0-only
// Copyright Authors of dogceo

pub mod decode;
pub mod models;

pub use decode::{decode, decode_raw, decode_str, decode_value, DecodeError, MalformedKind};
pub use models::responses::{
    ApiError, BreedsListResponse, DogCeoResponse, ImagesResponse, Message, RawMessage,
    RawResponse,
};
pub use models::{BreedsList, Images, Status};
