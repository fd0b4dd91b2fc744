use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::message::extract_error_message;
use crate::models::*;
use crate::plugin::{DEFAULT_API_URL, USER_AGENT};

/// GitHub REST API client acting on behalf of one user
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(token: &str) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Create a new GitHub client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        // No timeout override: transport defaults apply
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Build a repo-scoped URL. `repo` is `owner/name`.
    fn repo_url(&self, repo: &str, path: &str) -> String {
        format!("{}/repos/{}{}", self.base_url, repo, path)
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();
        debug!(status, "GitHub responded");

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // An unreadable body is reported the same way as an empty one
        let body = match response.body_mut().read_to_string() {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "failed to read GitHub error body");
                String::new()
            }
        };

        Err(GitHubError::Api {
            status,
            message: extract_error_message(status, content_type.as_deref(), &body),
        })
    }

    /// POST a JSON body and decode the JSON response
    fn post_json<B: Serialize, T: DeserializeOwned>(&self, url: &str, body: &B) -> Result<T> {
        debug!(method = "POST", url, "sending GitHub request");

        let response = self
            .agent
            .post(url)
            .header("User-Agent", USER_AGENT)
            .header("Authorization", &self.auth_header())
            .header("Content-Type", "application/json")
            .send_json(body)
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        // Invalid UTF-8 surfaces as a JSON error
        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(GitHubError::Body)?;
        let decoded = serde_json::from_slice(&bytes)?;
        Ok(decoded)
    }

    // ==================== Issue Operations ====================

    /// Create a new issue
    pub fn create_issue(&self, repo: &str, issue: &CreateGitHubIssue) -> Result<GitHubIssueRef> {
        let url = self.repo_url(repo, "/issues");
        self.post_json(&url, issue)
    }

    // ==================== Comment Operations ====================

    /// Add a comment to an issue
    ///
    /// Only the success of the call matters; the body is returned undecoded
    /// beyond being valid JSON.
    pub fn add_comment(&self, repo: &str, number: u64, body: &str) -> Result<serde_json::Value> {
        let url = self.repo_url(repo, &format!("/issues/{}/comments", number));

        let comment = CreateGitHubComment {
            body: body.to_string(),
        };

        self.post_json(&url, &comment)
    }
}
