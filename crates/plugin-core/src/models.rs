use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PluginError, Result};
use crate::forms::CleanedForm;

/// Host project identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

/// Host user identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Access token associating a host user with an external identity provider
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Auth provider key (e.g., "github")
    pub provider: String,
    pub access_token: String,
}

impl Credential {
    pub fn new(provider: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            access_token: access_token.into(),
        }
    }
}

// Tokens must never reach logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("provider", &self.provider)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// A user's request to file a new issue, or to comment on an existing one
/// when `issue_id` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSubmission {
    /// Issue title. Ignored when `issue_id` is present.
    pub title: Option<String>,
    pub description: String,
    /// Existing issue to attach a comment to
    pub issue_id: Option<u64>,
}

impl IssueSubmission {
    pub fn new_issue(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: description.into(),
            issue_id: None,
        }
    }

    pub fn comment(issue_id: u64, description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: description.into(),
            issue_id: Some(issue_id),
        }
    }

    /// Build a submission from a cleaned `title` / `description` / `issue_id` form
    pub fn from_form(form: &CleanedForm) -> Result<Self> {
        let submission = Self {
            title: form.text("title").map(str::to_string),
            description: form.text("description").unwrap_or_default().to_string(),
            issue_id: form.integer("issue_id"),
        };
        submission.validate()?;
        Ok(submission)
    }

    /// Check the submission preconditions
    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(PluginError::invalid_field(
                "description",
                "This field is required.",
            ));
        }

        match self.issue_id {
            Some(0) => Err(PluginError::invalid_field(
                "issue_id",
                "Ensure this value is greater than or equal to 1.",
            )),
            Some(_) => Ok(()),
            None if self.title.as_deref().is_some_and(|t| !t.trim().is_empty()) => Ok(()),
            None => Err(PluginError::invalid_field(
                "title",
                "A title is required unless an existing issue id is provided.",
            )),
        }
    }
}

/// External link shown on the plugin's settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub title: String,
    pub url: String,
}

/// Static description of a plugin
#[derive(Debug, Clone, Serialize)]
pub struct PluginMetadata {
    /// URL-safe identifier
    pub slug: String,
    pub title: String,
    /// Key the plugin's project options are stored under
    pub conf_key: String,
    /// Identity provider the plugin's credentials come from
    pub auth_provider: String,
    pub version: String,
    pub author: String,
    pub author_url: String,
    pub description: String,
    pub resource_links: Vec<ResourceLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_issue_requires_title() {
        let submission = IssueSubmission {
            title: Some("  ".to_string()),
            description: "Stack trace".to_string(),
            issue_id: None,
        };
        let err = submission.validate().unwrap_err();
        assert!(matches!(err, PluginError::InvalidField { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_comment_does_not_require_title() {
        assert!(IssueSubmission::comment(7, "Seen again").validate().is_ok());
    }

    #[test]
    fn test_description_always_required() {
        let err = IssueSubmission::comment(7, "").validate().unwrap_err();
        assert!(matches!(err, PluginError::InvalidField { ref field, .. } if field == "description"));
    }

    #[test]
    fn test_zero_issue_id_rejected() {
        let err = IssueSubmission::comment(0, "body").validate().unwrap_err();
        assert!(matches!(err, PluginError::InvalidField { ref field, .. } if field == "issue_id"));
    }

    #[test]
    fn test_credential_debug_redacts_token() {
        let credential = Credential::new("github", "ghp_secret");
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("github"));
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&ProjectId::new("backend")).unwrap();
        assert_eq!(json, "\"backend\"");
    }
}
