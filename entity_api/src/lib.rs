//! Persistence glue for the TeamHub fixture collections: the [`DocumentStore`]
//! collaborator, two backends for it and the seeding routine.

use log::*;
use service::config::Config;

pub use entity::{billing_plans, members, organizations, priority, projects, roles, status, tasks, Id};

mod collection;
pub mod error;
pub mod in_memory;
pub mod json_dir;
pub mod seed;
pub mod store;

pub use in_memory::InMemoryStore;
pub use json_dir::JsonDirStore;
pub use store::{Document, DocumentStore, UpsertOutcome};

/// Opens the store selected by `config`: a JSON directory when `store_dir` is set,
/// otherwise a fresh in-memory store.
pub async fn connect(config: &Config) -> Result<Box<dyn DocumentStore>, error::Error> {
    match config.store_dir() {
        Some(dir) => {
            info!("Using JSON document store at {}", dir.display());
            Ok(Box::new(JsonDirStore::open(dir).await?))
        }
        None => {
            info!("No store directory configured, using an in-memory store");
            Ok(Box::new(InMemoryStore::new()))
        }
    }
}
