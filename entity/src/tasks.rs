use crate::{priority::Priority, status::TaskStatus, Id, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const COLLECTION: &str = "tasks";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: Id,
    pub title: String,
    pub description: String,
    pub project_id: Id,
    /// Unassigned tasks are stored with an explicit `null`.
    pub assignee_id: Option<Id>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    pub created_by: Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn unassigned_task_keeps_null_assignee_and_plain_due_date() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
        let task = Model {
            id: "task_004".to_string(),
            title: "SEO audit and improvements".to_string(),
            description: "Conduct full SEO audit".to_string(),
            project_id: "proj_website_redesign".to_string(),
            assignee_id: None,
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            tags: vec!["seo".to_string(), "marketing".to_string()],
            created_at: at,
            updated_at: at,
            deleted_at: None,
            created_by: "user_01HQ3XK123".to_string(),
        };

        let document = serde_json::to_value(&task).unwrap();
        assert!(document
            .as_object()
            .unwrap()
            .get("assigneeId")
            .unwrap()
            .is_null());
        assert_eq!(document["dueDate"], "2026-03-01");
        assert_eq!(document["priority"], "MEDIUM");
    }
}
