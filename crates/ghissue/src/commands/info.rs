use crate::cli::OutputFormat;
use crate::output::{output_result, PluginForms};
use anyhow::Result;
use plugin_core::IssuePlugin;

pub fn handle_info(plugin: &dyn IssuePlugin, format: OutputFormat) -> Result<()> {
    output_result(plugin.metadata(), format);
    Ok(())
}

pub fn handle_forms(plugin: &dyn IssuePlugin, format: OutputFormat) -> Result<()> {
    let forms = PluginForms {
        config: plugin.config_form(),
        new_issue: plugin.new_issue_form(),
    };
    output_result(&forms, format);
    Ok(())
}
