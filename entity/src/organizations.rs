use crate::{Id, Timestamp};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "organizations";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: Id,
    pub name: String,
    pub slug: String,
    pub billing_plan_id: Id,
    pub member_count: u32,
    pub settings: Settings,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Soft-delete marker; `None` while the organization is live.
    pub deleted_at: Option<Timestamp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// IANA timezone name, e.g. `America/New_York`.
    pub timezone: String,
    /// ISO 4217 currency code.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: String,
    pub end: String,
}
