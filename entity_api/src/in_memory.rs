//! Process-local document store, used when no store directory is configured and by tests.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::collection::{insert_all, upsert_all, Collection};
use crate::error::Error;
use crate::store::{document_id, validate_collection, Document, DocumentStore, UpsertOutcome};

#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: DashMap<String, Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn delete_many(&self, collection: &str) -> Result<u64, Error> {
        validate_collection(collection)?;
        Ok(self
            .collections
            .remove(collection)
            .map(|(_, documents)| documents.len() as u64)
            .unwrap_or(0))
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), Error> {
        self.insert_many(collection, vec![document]).await.map(|_| ())
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<u64, Error> {
        validate_collection(collection)?;
        let mut entry = self.collections.entry(collection.to_owned()).or_default();
        insert_all(entry.value_mut(), documents)
    }

    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<UpsertOutcome, Error> {
        validate_collection(collection)?;
        let mut entry = self.collections.entry(collection.to_owned()).or_default();
        upsert_all(entry.value_mut(), documents)
    }

    async fn count(&self, collection: &str) -> Result<u64, Error> {
        validate_collection(collection)?;
        Ok(self
            .collections
            .get(collection)
            .map(|documents| documents.len() as u64)
            .unwrap_or(0))
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        validate_collection(collection)?;
        Ok(self
            .collections
            .get(collection)
            .and_then(|documents| documents.get(id).cloned()))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, Error> {
        validate_collection(collection)?;
        Ok(self
            .collections
            .get(collection)
            .map(|documents| documents.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntityApiErrorKind;
    use serde_json::json;

    #[tokio::test]
    async fn insert_count_and_delete() {
        let store = InMemoryStore::new();
        store
            .insert_many(
                "members",
                vec![json!({"_id": "user_2"}), json!({"_id": "user_1"})],
            )
            .await
            .unwrap();
        store
            .insert_one("members", json!({"_id": "user_3"}))
            .await
            .unwrap();

        assert_eq!(store.count("members").await.unwrap(), 3);
        assert_eq!(store.count("projects").await.unwrap(), 0);

        let ids: Vec<String> = store
            .find_all("members")
            .await
            .unwrap()
            .iter()
            .map(|document| document_id(document).unwrap())
            .collect();
        assert_eq!(ids, ["user_1", "user_2", "user_3"]);

        assert_eq!(store.delete_many("members").await.unwrap(), 3);
        assert_eq!(store.delete_many("members").await.unwrap(), 0);
        assert_eq!(store.count("members").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn insert_one_rejects_duplicate_id() {
        let store = InMemoryStore::new();
        store
            .insert_one("tasks", json!({"_id": "task_001"}))
            .await
            .unwrap();

        let err = store
            .insert_one("tasks", json!({"_id": "task_001"}))
            .await
            .unwrap_err();
        assert_eq!(err.error_kind, EntityApiErrorKind::DuplicateKey);
    }

    #[tokio::test]
    async fn bulk_upsert_replaces_by_id() {
        let store = InMemoryStore::new();
        store
            .bulk_upsert("tasks", vec![json!({"_id": "task_001", "status": "TODO"})])
            .await
            .unwrap();
        let outcome = store
            .bulk_upsert("tasks", vec![json!({"_id": "task_001", "status": "DONE"})])
            .await
            .unwrap();

        assert_eq!(outcome.replaced, 1);
        let task = store.find_by_id("tasks", "task_001").await.unwrap().unwrap();
        assert_eq!(task["status"], "DONE");
        assert!(store.find_by_id("tasks", "task_999").await.unwrap().is_none());
    }
}
