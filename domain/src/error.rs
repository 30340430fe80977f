//! Error types for the `domain` layer.
use crate::jwt::CredentialError;
use entity_api::error::{EntityApiErrorKind, Error as EntityApiError};
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree structure
/// with `domain::error::Error` as the root type holding a tree of `error_kind`
/// enums. The `source` field holds the original error from the lower layer
/// (a `CredentialError`, an `entity_api::error::Error`) so binaries can report
/// the full chain without depending on those layers' types directly.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
}

/// Enum representing the various kinds of internal errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    Credential(CredentialErrorKind),
    Entity(EntityErrorKind),
    /// Required runtime configuration (such as the signing key) is missing.
    Config,
    Other(String),
}

/// Credential failures, reduced to what callers act on.
#[derive(Debug, PartialEq)]
pub enum CredentialErrorKind {
    /// Key, issuer, validity window or claims were rejected at issue time.
    Construction,
    /// A presented token was malformed, tampered with or signed with another key.
    Rejected,
    Expired,
}

/// Errors bubbling up from the document store (`entity_api`).
#[derive(Debug, PartialEq)]
pub enum EntityErrorKind {
    NotFound,
    Invalid,
    Duplicate,
    Storage,
    Other(String),
}

impl Error {
    pub(crate) fn config() -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "Domain Error: {:?}: {source}", self.error_kind),
            None => write!(f, "Domain Error: {:?}", self.error_kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<CredentialError> for Error {
    fn from(err: CredentialError) -> Self {
        let credential_error_kind = match err {
            CredentialError::WeakKey { .. }
            | CredentialError::InvalidClaims(_)
            | CredentialError::Clock(_)
            | CredentialError::Serialization(_) => CredentialErrorKind::Construction,
            CredentialError::MalformedEncoding(_)
            | CredentialError::SignatureMismatch
            | CredentialError::UnsupportedAlgorithm(_) => CredentialErrorKind::Rejected,
            CredentialError::Expired { .. } => CredentialErrorKind::Expired,
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Credential(
                credential_error_kind,
            )),
        }
    }
}

// This is where we translate errors from the `entity_api` layer to the `domain` layer.
impl From<EntityApiError> for Error {
    fn from(err: EntityApiError) -> Self {
        let entity_error_kind = match err.error_kind {
            EntityApiErrorKind::RecordNotFound => EntityErrorKind::NotFound,
            EntityApiErrorKind::InvalidDocument | EntityApiErrorKind::InvalidCollection => {
                EntityErrorKind::Invalid
            }
            EntityApiErrorKind::DuplicateKey => EntityErrorKind::Duplicate,
            EntityApiErrorKind::SystemError => EntityErrorKind::Storage,
            EntityApiErrorKind::Other => EntityErrorKind::Other("EntityErrorKind".to_string()),
        };

        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Entity(entity_error_kind)),
        }
    }
}
