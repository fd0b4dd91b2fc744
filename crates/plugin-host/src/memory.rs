use plugin_core::{Credential, CredentialStore, OptionStore, ProjectId, Result, UserId};
use std::sync::RwLock;
use tracing::debug;

use crate::error::HostError;
use crate::state::{HostState, IdentityRecord};

/// Thread-safe in-memory project option and credential store
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: RwLock<HostState>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: HostState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Copy of the current contents, for persisting
    pub fn snapshot(&self) -> std::result::Result<HostState, HostError> {
        self.state
            .read()
            .map(|state| state.clone())
            .map_err(|_| HostError::Poisoned)
    }

    /// Read guard, or `None` when a writer panicked. Lookups then report
    /// "not set", while writes and snapshots return `HostError::Poisoned`.
    fn read(&self) -> Option<std::sync::RwLockReadGuard<'_, HostState>> {
        match self.state.read() {
            Ok(state) => Some(state),
            Err(_) => {
                debug!("host store lock poisoned, treating lookup as unset");
                None
            }
        }
    }

    fn write(&self) -> std::result::Result<std::sync::RwLockWriteGuard<'_, HostState>, HostError> {
        self.state.write().map_err(|_| HostError::Poisoned)
    }
}

impl OptionStore for MemoryHost {
    fn get_option(&self, project: &ProjectId, conf_key: &str, key: &str) -> Option<String> {
        let state = self.read()?;
        state
            .projects
            .get(project.as_str())?
            .get(conf_key)?
            .get(key)
            .cloned()
    }

    fn set_option(
        &self,
        project: &ProjectId,
        conf_key: &str,
        key: &str,
        value: &str,
    ) -> Result<()> {
        debug!(%project, conf_key, key, "setting project option");
        let mut state = self.write()?;
        state
            .projects
            .entry(project.as_str().to_string())
            .or_default()
            .entry(conf_key.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear_option(&self, project: &ProjectId, conf_key: &str, key: &str) -> Result<()> {
        debug!(%project, conf_key, key, "clearing project option");
        let mut state = self.write()?;
        if let Some(options) = state
            .projects
            .get_mut(project.as_str())
            .and_then(|p| p.get_mut(conf_key))
        {
            options.remove(key);
        }
        Ok(())
    }
}

impl CredentialStore for MemoryHost {
    fn get_credential(&self, user: &UserId, provider: &str) -> Option<Credential> {
        let state = self.read()?;
        state
            .identities
            .get(user.as_str())?
            .get(provider)
            .map(|record| Credential::new(provider, record.access_token.clone()))
    }

    fn associate(&self, user: &UserId, credential: Credential) -> Result<()> {
        debug!(%user, provider = %credential.provider, "associating identity");
        let mut state = self.write()?;
        state
            .identities
            .entry(user.as_str().to_string())
            .or_default()
            .insert(
                credential.provider,
                IdentityRecord {
                    access_token: credential.access_token,
                },
            );
        Ok(())
    }

    fn disassociate(&self, user: &UserId, provider: &str) -> Result<bool> {
        debug!(%user, provider, "removing identity");
        let mut state = self.write()?;
        let removed = state
            .identities
            .get_mut(user.as_str())
            .and_then(|identities| identities.remove(provider))
            .is_some();
        Ok(removed)
    }
}
