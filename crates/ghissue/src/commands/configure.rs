use crate::cli::OutputFormat;
use crate::host::LocalHost;
use crate::output::{output_result, ProjectStatus};
use anyhow::{Context, Result};
use plugin_core::{FormData, IssuePlugin, OptionStore, ProjectId};

pub fn handle_configure(
    plugin: &dyn IssuePlugin,
    host: &LocalHost,
    project: &ProjectId,
    repo: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    match repo {
        Some(repo) => {
            let mut form = FormData::new();
            form.insert("repo".to_string(), repo.to_string());
            plugin
                .save_config(project, &form)
                .with_context(|| format!("Failed to configure project {}", project))?;
        }
        None => {
            host.store
                .clear_option(project, &plugin.metadata().conf_key, "repo")
                .context("Failed to clear repository")?;
        }
    }
    host.persist()?;

    handle_status(plugin, host, project, format)
}

pub fn handle_status(
    plugin: &dyn IssuePlugin,
    host: &LocalHost,
    project: &ProjectId,
    format: OutputFormat,
) -> Result<()> {
    let status = ProjectStatus {
        project: project.to_string(),
        configured: plugin.is_configured(project),
        repo: host
            .store
            .get_option(project, &plugin.metadata().conf_key, "repo"),
    };
    output_result(&status, format);
    Ok(())
}
