use thiserror::Error;

/// Everything that can go wrong while issuing or checking a credential.
///
/// Construction-time failures (`WeakKey`, `InvalidClaims`, `Clock`) reflect programming
/// or configuration mistakes; verification-time failures (`MalformedEncoding`,
/// `SignatureMismatch`, `Expired`, `UnsupportedAlgorithm`) reject the presented token.
/// None of them are transient, so nothing here is ever retried.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("signing key is {bits} bits, below the required {min_bits} bits")]
    WeakKey { bits: usize, min_bits: usize },

    #[error("invalid claims: {0}")]
    InvalidClaims(String),

    #[error("system clock unusable: {0}")]
    Clock(String),

    #[error("malformed credential encoding: {0}")]
    MalformedEncoding(String),

    #[error("credential signature does not match")]
    SignatureMismatch,

    #[error("credential expired at {exp}, current time is {now}")]
    Expired { exp: i64, now: i64 },

    #[error("unsupported credential header: {0}")]
    UnsupportedAlgorithm(String),

    #[error("failed to serialize credential segment: {0}")]
    Serialization(#[from] serde_json::Error),
}
