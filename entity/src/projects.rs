use crate::{status::ProjectStatus, Id, Timestamp};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "projects";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: Id,
    pub name: String,
    pub description: String,
    pub organization_id: Id,
    pub status: ProjectStatus,
    pub member_ids: Vec<Id>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub created_by: Id,
}
