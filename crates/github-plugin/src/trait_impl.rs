//! Implementation of the plugin-core contract for GitHubPlugin

use plugin_core::{
    FormData, FormSpec, IssuePlugin, IssueSubmission, PluginError, PluginMetadata, ProjectId,
    Result, UserId,
};
use tracing::debug;

use crate::client::GitHubClient;
use crate::forms::{config_form, new_issue_form, validate_repo};
use crate::models::CreateGitHubIssue;
use crate::plugin::{GitHubPlugin, REPO_OPTION};

impl IssuePlugin for GitHubPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn is_configured(&self, project: &ProjectId) -> bool {
        self.repo(project).is_some_and(|repo| !repo.trim().is_empty())
    }

    fn config_form(&self) -> FormSpec {
        config_form()
    }

    fn save_config(&self, project: &ProjectId, form: &FormData) -> Result<()> {
        let cleaned = config_form().clean(form)?;
        let repo = cleaned.text(REPO_OPTION).unwrap_or_default();
        validate_repo(repo)?;

        self.options
            .set_option(project, &self.metadata.conf_key, REPO_OPTION, repo)
    }

    fn new_issue_form(&self) -> FormSpec {
        new_issue_form()
    }

    fn create_issue(
        &self,
        user: &UserId,
        project: &ProjectId,
        submission: &IssueSubmission,
    ) -> Result<u64> {
        submission.validate()?;

        let credential = self
            .credentials
            .get_credential(user, &self.metadata.auth_provider)
            .ok_or_else(|| PluginError::Unauthenticated {
                provider: self.metadata.title.clone(),
            })?;

        let repo = self
            .repo(project)
            .filter(|repo| !repo.trim().is_empty())
            .ok_or_else(|| PluginError::NotConfigured(project.to_string()))?;

        let client = GitHubClient::with_base_url(&self.api_url, &credential.access_token);

        match submission.issue_id {
            Some(number) => {
                debug!(%user, %project, repo = %repo, number, "attaching comment to GitHub issue");
                client.add_comment(&repo, number, &submission.description)?;
                Ok(number)
            }
            None => {
                debug!(%user, %project, repo = %repo, "creating GitHub issue");
                let issue = CreateGitHubIssue {
                    title: submission.title.clone().unwrap_or_default(),
                    body: submission.description.clone(),
                };
                let created = client.create_issue(&repo, &issue)?;
                Ok(created.number)
            }
        }
    }

    fn get_issue_label(&self, issue_id: u64) -> String {
        format!("GH-{}", issue_id)
    }

    fn get_issue_url(&self, project: &ProjectId, issue_id: u64) -> String {
        let repo = self.repo(project).unwrap_or_default();
        format!("{}/{}/issues/{}", self.web_url, repo, issue_id)
    }
}
