use crate::{roles::Role, Id, Timestamp};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "members";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: Id,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub organization_id: Id,
    pub avatar_url: String,
    pub invited_at: Timestamp,
    pub joined_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}
