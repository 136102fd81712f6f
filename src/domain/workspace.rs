use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(pub String);

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WorkspaceId {
    fn from(s: String) -> Self {
        WorkspaceId(s)
    }
}

impl From<&str> for WorkspaceId {
    fn from(s: &str) -> Self {
        WorkspaceId(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub desc: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// Backend container for a workspace listing. Order is the backend's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepeatedWorkspace {
    pub items: Vec<Workspace>,
}

impl From<Vec<Workspace>> for RepeatedWorkspace {
    fn from(items: Vec<Workspace>) -> Self {
        Self { items }
    }
}

/// Selects one workspace, or every workspace of the user when `value` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<WorkspaceId>,
}

impl WorkspaceQuery {
    pub fn all() -> Self {
        Self { value: None }
    }

    pub fn id(workspace_id: WorkspaceId) -> Self {
        Self {
            value: Some(workspace_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWorkspaceParams {
    pub name: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWorkspaceSetting {
    pub workspace: Workspace,
    pub latest_view_id: Option<String>,
}
