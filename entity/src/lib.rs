//! Records that make up the TeamHub fixture data set.
//!
//! Each module mirrors one document-store collection: a `Model` describing a single
//! document and a `COLLECTION` constant naming the collection it lives in. Documents are
//! serialized with camelCase field names and keyed by `_id`.

pub mod billing_plans;
pub mod members;
pub mod organizations;
pub mod priority;
pub mod projects;
pub mod roles;
pub mod status;
pub mod tasks;

/// A type alias that represents any record's id field data type.
/// Ids are prefixed strings such as `org_01HQ3XJMR5E0987654321` or `task_001`.
pub type Id = String;

/// Timestamp type shared by every record.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
