use crate::cli::{ColorChoice, OutputFormat};
use colored::Colorize;
use plugin_core::{FieldKind, FormSpec, PluginError, PluginMetadata};
use serde::Serialize;
use std::io::IsTerminal;

/// Initialize color mode based on CLI choice and environment
pub fn init_color(choice: ColorChoice) {
    let should_color = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        // https://no-color.org/
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    };
    colored::control::set_override(should_color);
}

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    // Plugin errors carry the message the host would show on the form
    let code = err
        .downcast_ref::<PluginError>()
        .map(PluginError::code)
        .unwrap_or("error");

    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: code.to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

/// Result of filing or looking up a linked issue
#[derive(Debug, Serialize)]
pub struct LinkedIssue {
    pub issue_id: u64,
    pub label: String,
    pub url: String,
    /// Whether the submission commented on an existing issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commented: Option<bool>,
}

impl Displayable for LinkedIssue {
    fn display(&self) -> String {
        let prefix = match self.commented {
            Some(true) => "Commented on ",
            Some(false) => "Created ",
            None => "",
        };
        format!("{}{} {}", prefix, self.label.cyan().bold(), self.url.dimmed())
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectStatus {
    pub project: String,
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl Displayable for ProjectStatus {
    fn display(&self) -> String {
        match (&self.repo, self.configured) {
            (Some(repo), true) => format!(
                "{}: {} {}",
                self.project.white().bold(),
                "linked to".dimmed(),
                repo.cyan()
            ),
            _ => format!("{}: {}", self.project.white().bold(), "not configured".yellow()),
        }
    }
}

impl Displayable for PluginMetadata {
    fn display(&self) -> String {
        let mut output = format!(
            "{} {} ({})\n  {}\n  {}: {}\n  {}: {}",
            self.title.cyan().bold(),
            self.version,
            self.slug.dimmed(),
            self.description,
            "Author".dimmed(),
            self.author,
            "Auth provider".dimmed(),
            self.auth_provider
        );
        for link in &self.resource_links {
            output.push_str(&format!("\n  {}: {}", link.title.dimmed(), link.url));
        }
        output
    }
}

/// Configuration and issue forms, as shown by `ghissue forms`
#[derive(Debug, Serialize)]
pub struct PluginForms {
    pub config: FormSpec,
    pub new_issue: FormSpec,
}

impl Displayable for PluginForms {
    fn display(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n{}",
            "Configuration form".white().bold(),
            display_form(&self.config),
            "Issue form".white().bold(),
            display_form(&self.new_issue)
        )
    }
}

fn display_form(form: &FormSpec) -> String {
    form.fields
        .iter()
        .map(|field| {
            let kind = match field.kind {
                FieldKind::Text => "text",
                FieldKind::Textarea => "textarea",
                FieldKind::Integer => "integer",
            };
            let mut line = format!(
                "  {} ({}, {}) - {}",
                field.name.cyan(),
                kind,
                if field.required { "required" } else { "optional" },
                field.label
            );
            if let Some(help) = &field.help_text {
                line.push_str(&format!("\n      {}", help.dimmed()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
