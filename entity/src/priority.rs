use serde::{Deserialize, Serialize};

/// How urgently a task needs attention.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Deserialize, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(fmt, "LOW"),
            Priority::Medium => write!(fmt, "MEDIUM"),
            Priority::High => write!(fmt, "HIGH"),
            Priority::Urgent => write!(fmt, "URGENT"),
        }
    }
}
