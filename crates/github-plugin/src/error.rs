use plugin_core::PluginError;
use thiserror::Error;

/// Service name used in user-facing messages
pub(crate) const SERVICE_NAME: &str = "GitHub";

#[derive(Error, Debug)]
pub enum GitHubError {
    /// Transport-level failure: connection, TLS, reading the body
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    /// 2xx response whose body could not be read in full
    #[error("Response body error: {0}")]
    Body(ureq::Error),

    /// 2xx response whose body did not decode
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for PluginError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => PluginError::RemoteService {
                service: SERVICE_NAME.to_string(),
                status: None,
                message: e.to_string(),
            },
            GitHubError::Body(e) => PluginError::ResponseDecode {
                service: SERVICE_NAME.to_string(),
                message: e.to_string(),
            },
            GitHubError::Parse(e) => PluginError::ResponseDecode {
                service: SERVICE_NAME.to_string(),
                message: e.to_string(),
            },
            GitHubError::Api { status, message } => PluginError::RemoteService {
                service: SERVICE_NAME.to_string(),
                status: Some(status),
                message,
            },
        }
    }
}
