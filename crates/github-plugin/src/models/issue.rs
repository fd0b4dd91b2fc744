use serde::{Deserialize, Serialize};

/// Request body for creating a GitHub issue
#[derive(Debug, Clone, Serialize)]
pub struct CreateGitHubIssue {
    pub title: String,
    pub body: String,
}

/// The part of a created issue the plugin reads back
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssueRef {
    pub number: u64,
    #[serde(default)]
    pub html_url: Option<String>,
}
