//! Form declarations for the GitHub plugin

use plugin_core::{FieldError, FormField, FormSpec};

/// Project settings form: the repository to file issues in
pub fn config_form() -> FormSpec {
    FormSpec::new(vec![
        FormField::text("repo", "Repository Name")
            .placeholder("e.g. getsentry/sentry")
            .help_text("Enter your repository name, including the owner."),
    ])
}

/// Issue form. `issue_id` comes first so commenting on an existing issue is
/// the first choice offered.
pub fn new_issue_form() -> FormSpec {
    FormSpec::new(vec![
        FormField::integer("issue_id", "Issue #").optional(),
        FormField::text("title", "Title").optional().help_text(
            "If an Issue id is provided, Title is ignored and the issue will be \
             attached to an existing issue with that id",
        ),
        FormField::textarea("description", "Description"),
    ])
}

/// Check a repository name has the `owner/repo` shape
pub fn validate_repo(repo: &str) -> Result<(), FieldError> {
    let valid = match repo.split_once('/') {
        Some((owner, name)) => {
            !owner.is_empty() && !name.is_empty() && !name.contains('/') && !repo.contains(' ')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(FieldError::new(
            "repo",
            "Enter the repository as owner/name, e.g. getsentry/sentry.",
        ))
    }
}
