use crate::cli::OutputFormat;
use crate::output::{output_result, LinkedIssue};
use anyhow::{anyhow, Context, Result};
use plugin_core::{FormData, IssuePlugin, IssueSubmission, PluginError, ProjectId, UserId};

/// Raw values of the issue form, as typed by the user
pub struct IssueArgs<'a> {
    pub issue_id: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl IssueArgs<'_> {
    fn to_form(&self) -> FormData {
        [
            ("issue_id", self.issue_id),
            ("title", self.title),
            ("description", self.description),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_string())))
        .collect()
    }
}

pub fn handle_create(
    plugin: &dyn IssuePlugin,
    user: &UserId,
    project: &ProjectId,
    args: &IssueArgs,
    format: OutputFormat,
) -> Result<()> {
    if !plugin.is_configured(project) {
        return Err(anyhow!(
            "Project {} is not configured. Run 'ghissue configure --project {} --repo owner/name' first",
            project,
            project
        ));
    }

    let cleaned = plugin
        .new_issue_form()
        .clean(&args.to_form())
        .map_err(PluginError::from)?;
    let submission = IssueSubmission::from_form(&cleaned)?;

    let issue_id = plugin
        .create_issue(user, project, &submission)
        .context(plugin.get_new_issue_title())?;

    let linked = LinkedIssue {
        issue_id,
        label: plugin.get_issue_label(issue_id),
        url: plugin.get_issue_url(project, issue_id),
        commented: Some(submission.issue_id.is_some()),
    };
    output_result(&linked, format);
    Ok(())
}

pub fn handle_link(
    plugin: &dyn IssuePlugin,
    project: &ProjectId,
    issue_id: u64,
    open_browser: bool,
    format: OutputFormat,
) -> Result<()> {
    let linked = LinkedIssue {
        issue_id,
        label: plugin.get_issue_label(issue_id),
        url: plugin.get_issue_url(project, issue_id),
        commented: None,
    };

    if open_browser {
        open::that(&linked.url).with_context(|| format!("Failed to open {}", linked.url))?;
    }

    output_result(&linked, format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_args_skip_missing_values() {
        let args = IssueArgs {
            issue_id: Some("4"),
            title: None,
            description: Some("again"),
        };
        let form = args.to_form();

        assert_eq!(form.len(), 2);
        assert_eq!(form["issue_id"], "4");
        assert_eq!(form["description"], "again");
    }
}
