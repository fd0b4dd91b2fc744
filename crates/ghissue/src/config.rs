use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use plugin_core::{ProjectId, UserId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "GHISSUE_";
const STATE_FILE_NAME: &str = "state.toml";

/// CLI configuration, layered: defaults, config file, `GHISSUE_*` env, flags
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct Config {
    /// GitHub REST API root
    pub api_url: Option<String>,
    /// GitHub web root for issue links
    pub web_url: Option<String>,
    /// Host state file
    pub state_path: Option<PathBuf>,
    pub default_project: Option<String>,
    pub default_user: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(anyhow!("Config file not found: {}", path.display()));
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                if let Some(path) = default_config_path().filter(|p| p.exists()) {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        // These env vars are read by clap directly
        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config", "state", "token"]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        api_url: Option<String>,
        web_url: Option<String>,
        state: Option<PathBuf>,
    ) {
        if let Some(url) = api_url {
            self.api_url = Some(url);
        }
        if let Some(url) = web_url {
            self.web_url = Some(url);
        }
        if let Some(path) = state {
            self.state_path = Some(path);
        }
    }

    /// Resolved host state file location
    pub fn state_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.state_path {
            return Ok(path.clone());
        }

        ProjectDirs::from("", "", "ghissue")
            .map(|dirs| dirs.data_dir().join(STATE_FILE_NAME))
            .context("Could not determine a data directory. Set --state or GHISSUE_STATE_PATH")
    }

    pub fn project(&self, explicit: Option<&str>) -> Result<ProjectId> {
        explicit
            .or(self.default_project.as_deref())
            .map(ProjectId::new)
            .ok_or_else(|| {
                anyhow!("No project given. Pass --project or set default_project in the config file")
            })
    }

    pub fn user(&self, explicit: Option<&str>) -> Result<UserId> {
        explicit
            .or(self.default_user.as_deref())
            .map(UserId::new)
            .ok_or_else(|| {
                anyhow!("No user given. Pass --user or set default_user in the config file")
            })
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ghissue").map(|d| d.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"https://ghe.example.com/api/v3\"\ndefault_project = \"backend\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.api_url.as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(config.project(None).unwrap(), ProjectId::new("backend"));
        assert_eq!(config.project(Some("web")).unwrap(), ProjectId::new("web"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::load(Some(Path::new("/nonexistent/ghissue.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = Config {
            api_url: Some("https://a".to_string()),
            ..Config::default()
        };
        config.merge_with_cli(
            Some("https://b".to_string()),
            None,
            Some(PathBuf::from("/tmp/state.toml")),
        );

        assert_eq!(config.api_url.as_deref(), Some("https://b"));
        assert_eq!(config.web_url, None);
        assert_eq!(
            config.state_path().unwrap(),
            PathBuf::from("/tmp/state.toml")
        );
    }

    #[test]
    fn test_missing_user_is_error() {
        let err = Config::default().user(None).unwrap_err();
        assert!(err.to_string().contains("--user"));
    }
}
