//! Text-safe segment encoding: unpadded base64 over the URL-safe alphabet
//! (`A-Z a-z 0-9 - _`). The alphabet never contains the `.` segment delimiter.
//!
//! Decoding is strict. Padding characters, characters from the standard alphabet
//! (`+`, `/`), lengths of the form `4n + 1` and non-zero trailing bits are all rejected,
//! so every byte sequence has exactly one accepted encoding.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{de::DeserializeOwned, Serialize};

use super::error::CredentialError;

pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn decode(segment: &str) -> Result<Vec<u8>, CredentialError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|err| CredentialError::MalformedEncoding(err.to_string()))
}

/// Serializes `value` to compact JSON and encodes it. Field order is the declaration
/// order of the serialized type, which keeps the output byte-for-byte stable.
pub fn encode_json<T: Serialize>(value: &T) -> Result<String, CredentialError> {
    Ok(encode(serde_json::to_vec(value)?))
}

pub fn decode_json<T: DeserializeOwned>(segment: &str) -> Result<T, CredentialError> {
    let bytes = decode(segment)?;
    serde_json::from_slice(&bytes).map_err(|err| {
        CredentialError::MalformedEncoding(format!("segment is not the expected JSON: {err}"))
    })
}
