use serde::{Deserialize, Serialize};

/// Role a member holds inside an organization.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Deserialize, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Admin,
    #[default]
    Member,
    Viewer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Owner => write!(fmt, "OWNER"),
            Role::Admin => write!(fmt, "ADMIN"),
            Role::Member => write!(fmt, "MEMBER"),
            Role::Viewer => write!(fmt, "VIEWER"),
        }
    }
}
