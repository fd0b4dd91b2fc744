use serde::Deserialize;

/// Error payload GitHub returns with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubErrorBody {
    pub message: Option<String>,
}
