//! Error types for entity API
use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;

/// Errors while executing operations against the document store.
/// The intent is to categorize errors into two major types:
///  * Errors related to data. Ex EntityApiErrorKind::DuplicateKey
///  * Errors related to interactions with the store itself. Ex EntityApiErrorKind::SystemError
#[derive(Debug)]
pub struct Error {
    // Underlying error emitted by serde or the filesystem, when there is one
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    // Enum representing which category of error
    pub error_kind: EntityApiErrorKind,
}

#[derive(Debug, PartialEq, Serialize)]
pub enum EntityApiErrorKind {
    // A document with the same `_id` already exists in the collection
    DuplicateKey,
    // Document is not an object or lacks a string `_id`
    InvalidDocument,
    // Collection name is empty or contains characters outside [a-z0-9_]
    InvalidCollection,
    // Record not found
    RecordNotFound,
    // Errors related to interactions with the store itself. Ex an unreadable file
    SystemError,
    // Other errors
    Other,
}

impl Error {
    pub(crate) fn new(error_kind: EntityApiErrorKind) -> Self {
        Error {
            source: None,
            error_kind,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Entity API Error: {:?}", self.error_kind)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: EntityApiErrorKind::InvalidDocument,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: EntityApiErrorKind::SystemError,
        }
    }
}
