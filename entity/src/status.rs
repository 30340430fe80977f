use serde::{Deserialize, Serialize};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
}

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Active => write!(fmt, "ACTIVE"),
            ProjectStatus::Completed => write!(fmt, "COMPLETED"),
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(fmt, "TODO"),
            TaskStatus::InProgress => write!(fmt, "IN_PROGRESS"),
            TaskStatus::InReview => write!(fmt, "IN_REVIEW"),
            TaskStatus::Done => write!(fmt, "DONE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_serializes_with_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"IN_REVIEW\"").unwrap(),
            TaskStatus::InReview
        );
    }

    #[test]
    fn display_matches_the_stored_form() {
        for status in [
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::InReview,
            TaskStatus::Done,
        ] {
            assert_eq!(
                serde_json::to_string(&status).unwrap(),
                format!("\"{status}\"")
            );
        }
        assert_eq!(ProjectStatus::Completed.to_string(), "COMPLETED");
    }
}
