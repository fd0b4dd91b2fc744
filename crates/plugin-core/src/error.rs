use thiserror::Error;

use crate::forms::FieldError;

/// Errors surfaced by issue plugins to the host.
///
/// The `Display` form of every variant is the message the host shows as a
/// validation error on the submission form.
#[derive(Error, Debug)]
pub enum PluginError {
    /// The acting user has no credential for the plugin's auth provider
    #[error("You have not yet associated {provider} with your account.")]
    Unauthenticated { provider: String },

    /// Non-2xx response or transport failure. `status` is `None` for the latter.
    #[error("Error communicating with {service}: {message}")]
    RemoteService {
        service: String,
        status: Option<u16>,
        message: String,
    },

    /// A 2xx response whose body could not be decoded
    #[error("Error decoding response from {service}: {message}")]
    ResponseDecode { service: String, message: String },

    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },

    /// One or more fields of a submitted form failed validation
    #[error("{}", join_field_errors(.0))]
    InvalidForm(Vec<FieldError>),

    #[error("Plugin is not configured for project {0}")]
    NotConfigured(String),

    #[error("Host error: {0}")]
    Host(String),
}

impl PluginError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        PluginError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Short machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            PluginError::Unauthenticated { .. } => "unauthenticated",
            PluginError::RemoteService { .. } => "remote_service",
            PluginError::ResponseDecode { .. } => "response_decode",
            PluginError::InvalidField { .. } => "invalid_field",
            PluginError::InvalidForm(_) => "invalid_form",
            PluginError::NotConfigured(_) => "not_configured",
            PluginError::Host(_) => "host",
        }
    }
}

impl From<FieldError> for PluginError {
    fn from(err: FieldError) -> Self {
        PluginError::InvalidField {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<Vec<FieldError>> for PluginError {
    fn from(errors: Vec<FieldError>) -> Self {
        PluginError::InvalidForm(errors)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, PluginError>;
