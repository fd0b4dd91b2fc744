use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::HostError;

/// Options for one project: conf_key -> key -> value
pub type ProjectOptions = BTreeMap<String, BTreeMap<String, String>>;

/// One user's association with an identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub access_token: String,
}

/// Everything the reference host persists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    /// project id -> options
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectOptions>,

    /// user id -> provider -> identity
    #[serde(default)]
    pub identities: BTreeMap<String, BTreeMap<String, IdentityRecord>>,
}

impl HostState {
    /// Load state from a TOML file. A missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self, HostError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| HostError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| HostError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write state as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), HostError> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| HostError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| HostError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_state() {
        let dir = TempDir::new().unwrap();
        let state = HostState::load(&dir.path().join("state.toml")).unwrap();
        assert_eq!(state, HostState::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut state = HostState::default();
        state
            .projects
            .entry("backend".to_string())
            .or_default()
            .entry("github".to_string())
            .or_default()
            .insert("repo".to_string(), "acme/widgets".to_string());
        state.identities.entry("alice".to_string()).or_default().insert(
            "github".to_string(),
            IdentityRecord {
                access_token: "ghp_abc".to_string(),
            },
        );

        state.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("acme/widgets"));

        assert_eq!(HostState::load(&path).unwrap(), state);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.toml");
        std::fs::write(&path, "projects = 3").unwrap();

        let err = HostState::load(&path).unwrap_err();
        assert!(matches!(err, HostError::Parse { .. }));
        assert!(err.to_string().contains("state.toml"));
    }
}
