mod cli;
mod commands;
mod config;
mod host;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{AuthCommands, Cli, Commands};
use commands::issue::IssueArgs;
use config::Config;
use github_plugin::GitHubPlugin;
use host::LocalHost;
use output::output_error;
use plugin_core::IssuePlugin;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::init_color(cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    // Completions need neither config nor state
    if let Commands::Completions { shell } = &cli.command {
        Cli::generate_completions(*shell);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.api_url.clone(), cli.web_url.clone(), cli.state.clone());

    let host = LocalHost::open(config.state_path()?)?;

    let mut plugin = GitHubPlugin::new(host.store.clone(), host.store.clone());
    if let Some(url) = &config.api_url {
        plugin = plugin.with_api_url(url);
    }
    if let Some(url) = &config.web_url {
        plugin = plugin.with_web_url(url);
    }

    run_with_plugin(&plugin, &host, &config, cli)
}

/// Dispatch a command against the plugin through its host-facing interface
fn run_with_plugin(
    plugin: &dyn IssuePlugin,
    host: &LocalHost,
    config: &Config,
    cli: &Cli,
) -> Result<()> {
    let format = cli.format;

    match &cli.command {
        Commands::Info => commands::info::handle_info(plugin, format),
        Commands::Forms => commands::info::handle_forms(plugin, format),
        Commands::Configure {
            project,
            repo,
            clear: _,
        } => {
            let project = config.project(project.as_deref())?;
            commands::configure::handle_configure(plugin, host, &project, repo.as_deref(), format)
        }
        Commands::Status { project } => {
            let project = config.project(project.as_deref())?;
            commands::configure::handle_status(plugin, host, &project, format)
        }
        Commands::Auth { action } => match action {
            AuthCommands::Login { user, token } => {
                let user = config.user(user.as_deref())?;
                commands::auth::handle_login(plugin, host, &user, token)
            }
            AuthCommands::Logout { user } => {
                let user = config.user(user.as_deref())?;
                commands::auth::handle_logout(plugin, host, &user)
            }
        },
        Commands::Create {
            project,
            user,
            issue_id,
            title,
            description,
        } => {
            let project = config.project(project.as_deref())?;
            let user = config.user(user.as_deref())?;
            let args = IssueArgs {
                issue_id: issue_id.as_deref(),
                title: title.as_deref(),
                description: description.as_deref(),
            };
            commands::issue::handle_create(plugin, &user, &project, &args, format)
        }
        Commands::Link {
            project,
            issue_id,
            open,
        } => {
            let project = config.project(project.as_deref())?;
            commands::issue::handle_link(plugin, &project, *issue_id, *open, format)
        }
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            Ok(())
        }
    }
}
