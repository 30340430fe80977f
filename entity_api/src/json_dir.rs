//! Document store persisted as one pretty-printed JSON array per collection
//! (`<root>/<collection>.json`), handy for inspecting or shipping fixture data.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::*;
use tokio::fs;
use tokio::sync::Mutex;

use crate::collection::{insert_all, upsert_all, Collection};
use crate::error::Error;
use crate::store::{validate_collection, Document, DocumentStore, UpsertOutcome};

#[derive(Debug)]
pub struct JsonDirStore {
    root: PathBuf,
    // Serializes read-modify-write cycles on the collection files.
    write_lock: Mutex<()>,
}

impl JsonDirStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!("Opened JSON document store at {}", root.display());
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: &str) -> Result<PathBuf, Error> {
        validate_collection(collection)?;
        Ok(self.root.join(format!("{collection}.json")))
    }

    async fn load(&self, collection: &str) -> Result<Collection, Error> {
        let path = self.path_for(collection)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Collection::new()),
            Err(err) => return Err(err.into()),
        };
        let documents: Vec<Document> = serde_json::from_slice(&bytes)?;
        let mut loaded = Collection::new();
        upsert_all(&mut loaded, documents)?;
        Ok(loaded)
    }

    async fn save(&self, collection: &str, documents: &Collection) -> Result<(), Error> {
        let path = self.path_for(collection)?;
        let ordered: Vec<&Document> = documents.values().collect();
        let bytes = serde_json::to_vec_pretty(&ordered)?;

        // Write beside the target and rename so readers never see a partial file.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, bytes).await?;
        fs::rename(&staging, &path).await?;
        trace!("Wrote {} documents to {}", documents.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonDirStore {
    async fn delete_many(&self, collection: &str) -> Result<u64, Error> {
        let _guard = self.write_lock.lock().await;
        let removed = self.load(collection).await?.len() as u64;
        match fs::remove_file(self.path_for(collection)?).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        Ok(removed)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), Error> {
        self.insert_many(collection, vec![document]).await.map(|_| ())
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<u64, Error> {
        let _guard = self.write_lock.lock().await;
        let mut current = self.load(collection).await?;
        let inserted = insert_all(&mut current, documents)?;
        self.save(collection, &current).await?;
        Ok(inserted)
    }

    async fn bulk_upsert(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<UpsertOutcome, Error> {
        let _guard = self.write_lock.lock().await;
        let mut current = self.load(collection).await?;
        let outcome = upsert_all(&mut current, documents)?;
        self.save(collection, &current).await?;
        Ok(outcome)
    }

    async fn count(&self, collection: &str) -> Result<u64, Error> {
        Ok(self.load(collection).await?.len() as u64)
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Document>, Error> {
        Ok(self.load(collection).await?.remove(id))
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, Error> {
        Ok(self.load(collection).await?.into_values().collect())
    }
}
