//! Storage the host application provides to plugins

use crate::error::Result;
use crate::models::{Credential, ProjectId, UserId};

/// Per-project plugin settings, owned by the host
pub trait OptionStore: Send + Sync {
    /// Read an option stored under `conf_key` for a project
    fn get_option(&self, project: &ProjectId, conf_key: &str, key: &str) -> Option<String>;

    fn set_option(&self, project: &ProjectId, conf_key: &str, key: &str, value: &str)
        -> Result<()>;

    fn clear_option(&self, project: &ProjectId, conf_key: &str, key: &str) -> Result<()>;
}

/// Per-user identity associations, owned by the host
pub trait CredentialStore: Send + Sync {
    /// Credential the user associated for `provider`, if any
    fn get_credential(&self, user: &UserId, provider: &str) -> Option<Credential>;

    /// Associate a credential with a user, replacing any previous one for the
    /// same provider
    fn associate(&self, user: &UserId, credential: Credential) -> Result<()>;

    /// Remove the association. Returns whether one existed.
    fn disassociate(&self, user: &UserId, provider: &str) -> Result<bool>;
}
