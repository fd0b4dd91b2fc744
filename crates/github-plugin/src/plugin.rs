use std::sync::Arc;

use plugin_core::{CredentialStore, OptionStore, PluginMetadata, ProjectId, ResourceLink};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_WEB_URL: &str = "https://github.com";

/// Client identifier sent with every request
pub const USER_AGENT: &str = concat!("github-plugin/", env!("CARGO_PKG_VERSION"));

/// Option key holding the `owner/repo` of a project
pub(crate) const REPO_OPTION: &str = "repo";

/// Integrates GitHub Issues by linking a repository to a project
///
/// Reads project settings and user credentials through the host's stores.
pub struct GitHubPlugin {
    pub(crate) metadata: PluginMetadata,
    pub(crate) api_url: String,
    pub(crate) web_url: String,
    pub(crate) options: Arc<dyn OptionStore>,
    pub(crate) credentials: Arc<dyn CredentialStore>,
}

impl GitHubPlugin {
    pub fn new(options: Arc<dyn OptionStore>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            metadata: metadata(),
            api_url: DEFAULT_API_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            options,
            credentials,
        }
    }

    /// Use a different REST API root (GitHub Enterprise or testing)
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Use a different web root for issue links
    pub fn with_web_url(mut self, url: &str) -> Self {
        self.web_url = url.trim_end_matches('/').to_string();
        self
    }

    /// The `owner/repo` configured for a project
    pub fn repo(&self, project: &ProjectId) -> Option<String> {
        self.options
            .get_option(project, &self.metadata.conf_key, REPO_OPTION)
    }
}

fn metadata() -> PluginMetadata {
    PluginMetadata {
        slug: "github".to_string(),
        title: "GitHub".to_string(),
        conf_key: "github".to_string(),
        auth_provider: "github".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        author: "Sentry Team".to_string(),
        author_url: "https://github.com/getsentry/sentry".to_string(),
        description: "Integrate GitHub issues by linking a repository to a project.".to_string(),
        resource_links: vec![
            ResourceLink {
                title: "Bug Tracker".to_string(),
                url: "https://github.com/getsentry/sentry-github/issues".to_string(),
            },
            ResourceLink {
                title: "Source".to_string(),
                url: "https://github.com/getsentry/sentry-github".to_string(),
            },
        ],
    }
}
