//! Storage codec: text encoding that keeps dates typed across a round trip.
//!
//! JSON has no date type, so every date is written as a tagged wrapper
//! `{"__type": "Date", "value": "<RFC 3339>"}` and revived on the way back.
//!
//! Two layers share the same tag:
//!
//! - [`StoredValue`] with [`encode`] / [`decode`] / [`revive`] for arbitrary
//!   value trees, dates at any depth.
//! - [`encode_typed`] / [`decode_typed`] for domain records, whose date
//!   fields use the [`tagged_date`] serde adapter.

pub mod tagged_date;
mod value;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use value::{StoredValue, decode, encode, revive};

/// Discriminant field of a tagged date wrapper.
pub const DATE_TAG_FIELD: &str = "__type";

/// Discriminant value identifying a date wrapper.
pub const DATE_TAG: &str = "Date";

/// Field holding the timestamp inside a tagged date wrapper.
pub const DATE_VALUE_FIELD: &str = "value";

/// Errors produced by the storage codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be written as text.
    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text is not valid JSON.
    #[error("Failed to parse stored text: {0}")]
    Parse(#[source] serde_json::Error),

    /// The text is JSON but does not have the expected shape
    /// (missing fields, wrong types, malformed date tags).
    #[error("Stored value has an unexpected shape: {0}")]
    Shape(#[source] serde_json::Error),
}

impl CodecError {
    fn from_read(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::Shape(err)
        } else {
            Self::Parse(err)
        }
    }
}

/// Encode a typed value (usually a collection snapshot) as text.
pub fn encode_typed<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::Encode)
}

/// Decode a typed value previously written by [`encode_typed`].
///
/// Date fields declared with [`tagged_date`] also accept bare timestamps,
/// so snapshots written before tagging was introduced still load.
pub fn decode_typed<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    serde_json::from_str(text).map_err(CodecError::from_read)
}
