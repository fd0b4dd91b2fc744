use serde::Serialize;

/// Request body for creating a comment
#[derive(Debug, Clone, Serialize)]
pub struct CreateGitHubComment {
    pub body: String,
}
