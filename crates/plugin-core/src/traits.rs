use crate::error::Result;
use crate::forms::{FormData, FormSpec};
use crate::models::*;

/// Capabilities an issue-tracker plugin exposes to the host
///
/// The host holds each plugin as `&dyn IssuePlugin` and calls these per
/// request. Implementations carry no per-request state, so one value can serve
/// concurrent callers.
pub trait IssuePlugin: Send + Sync {
    fn metadata(&self) -> &PluginMetadata;

    // ========== Configuration ==========

    /// Whether the project has the settings the plugin needs
    fn is_configured(&self, project: &ProjectId) -> bool;

    /// Form the host renders on the project's plugin settings page
    fn config_form(&self) -> FormSpec;

    /// Validate configuration values and store them for the project
    fn save_config(&self, project: &ProjectId, form: &FormData) -> Result<()>;

    // ========== Issue Operations ==========

    /// Form the host renders when a user files an issue
    fn new_issue_form(&self) -> FormSpec;

    /// File the submission with the external tracker on the user's behalf and
    /// return the identifier of the issue it landed on
    fn create_issue(
        &self,
        user: &UserId,
        project: &ProjectId,
        submission: &IssueSubmission,
    ) -> Result<u64>;

    // ========== Display ==========

    /// Short label for a linked issue
    fn get_issue_label(&self, issue_id: u64) -> String;

    /// Deep link to a linked issue
    fn get_issue_url(&self, project: &ProjectId, issue_id: u64) -> String;

    /// Caption of the host's "create issue" action
    fn get_new_issue_title(&self) -> String {
        format!("Create {} Issue", self.metadata().title)
    }
}
