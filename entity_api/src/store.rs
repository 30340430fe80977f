//! The document-store collaborator the seeder writes through.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{EntityApiErrorKind, Error};

/// A single stored document: a JSON object carrying a string `_id`.
pub type Document = serde_json::Value;

/// Result of a bulk upsert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub inserted: u64,
    pub replaced: u64,
}

/// Collection-level operations over a document store, keyed by collection name.
///
/// Implementations must:
/// - key documents by their `_id` field
/// - return documents in ascending `_id` order from `find_all`
/// - apply `insert_many` all-or-nothing
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Remove every document in a collection, returning how many were removed.
    async fn delete_many(&self, collection: &str) -> Result<u64, Error>;

    /// Insert one document; fails with `DuplicateKey` when the `_id` is taken.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), Error>;

    /// Insert a batch of documents; fails with `DuplicateKey` without writing anything
    /// if any `_id` is taken or repeated inside the batch.
    async fn insert_many(&self, collection: &str, documents: Vec<Document>)
        -> Result<u64, Error>;

    /// Replace-or-insert each document by `_id`. Running it twice is a no-op the second time.
    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<UpsertOutcome, Error>;

    /// Number of documents in a collection. Unknown collections count as empty.
    async fn count(&self, collection: &str) -> Result<u64, Error>;

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, Error>;

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, Error>;
}

/// Extracts the `_id` of a document.
pub fn document_id(document: &Document) -> Result<String, Error> {
    document
        .as_object()
        .and_then(|object| object.get("_id"))
        .and_then(|id| id.as_str())
        .map(str::to_owned)
        .ok_or_else(|| Error::new(EntityApiErrorKind::InvalidDocument))
}

/// Collection names become file names in some backends, so they are restricted to
/// lowercase ASCII letters, digits and underscores.
pub fn validate_collection(collection: &str) -> Result<(), Error> {
    let valid = !collection.is_empty()
        && collection
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_');
    if valid {
        Ok(())
    } else {
        Err(Error::new(EntityApiErrorKind::InvalidCollection))
    }
}

/// Serializes typed records into store documents.
pub fn to_documents<T: Serialize>(records: &[T]) -> Result<Vec<Document>, Error> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(Error::from))
        .collect()
}

/// Deserializes store documents back into typed records.
pub fn from_documents<T: DeserializeOwned>(documents: Vec<Document>) -> Result<Vec<T>, Error> {
    documents
        .into_iter()
        .map(|document| serde_json::from_value(document).map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn document_id_requires_a_string_id() {
        assert_eq!(
            document_id(&json!({"_id": "task_001"})).unwrap(),
            "task_001"
        );
        for bad in [json!({"_id": 7}), json!({"id": "task_001"}), json!(["task_001"])] {
            assert_eq!(
                document_id(&bad).unwrap_err().error_kind,
                EntityApiErrorKind::InvalidDocument
            );
        }
    }

    #[test]
    fn collection_names_are_restricted() {
        assert!(validate_collection("billingplans").is_ok());
        assert!(validate_collection("audit_log_2").is_ok());
        for bad in ["", "../etc", "Members", "tasks.json"] {
            assert_eq!(
                validate_collection(bad).unwrap_err().error_kind,
                EntityApiErrorKind::InvalidCollection
            );
        }
    }
}
