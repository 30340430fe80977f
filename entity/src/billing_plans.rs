use crate::{Id, Timestamp};
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "billingplans";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: Id,
    pub name: String,
    pub tier: Tier,
    pub max_members: u32,
    pub max_projects: u32,
    pub features: Vec<String>,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Free,
    Pro,
    Enterprise,
}
