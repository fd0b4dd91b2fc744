use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ghissue",
    version,
    about = "File GitHub issues and comments from error reports"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "GHISSUE_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the host state file (project options and identities)
    #[arg(long, env = "GHISSUE_STATE", global = true, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// GitHub REST API root (overrides config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// GitHub web root used for issue links (overrides config file)
    #[arg(long, global = true, value_name = "URL")]
    pub web_url: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show plugin metadata
    Info,
    /// Show the configuration and issue form declarations
    Forms,
    /// Link a GitHub repository to a project
    Configure {
        /// Project to configure (defaults to config `default_project`)
        #[arg(long, short = 'p')]
        project: Option<String>,
        /// Repository as owner/name
        #[arg(long, short = 'r', conflicts_with = "clear", required_unless_present = "clear")]
        repo: Option<String>,
        /// Remove the linked repository
        #[arg(long)]
        clear: bool,
    },
    /// Show whether a project is configured
    Status {
        #[arg(long, short = 'p')]
        project: Option<String>,
    },
    /// Associate or remove a user's GitHub credential
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Create a GitHub issue, or comment on an existing one with --issue-id
    #[command(visible_alias = "new")]
    Create {
        #[arg(long, short = 'p')]
        project: Option<String>,
        /// Acting user (defaults to config `default_user`)
        #[arg(long, short = 'u')]
        user: Option<String>,
        /// Existing issue number to attach a comment to
        #[arg(long, short = 'i')]
        issue_id: Option<String>,
        /// Issue title (ignored with --issue-id)
        #[arg(long, short = 't')]
        title: Option<String>,
        /// Issue body or comment text
        #[arg(long, short = 'd')]
        description: Option<String>,
    },
    /// Show the label and URL of a linked issue
    Link {
        #[arg(long, short = 'p')]
        project: Option<String>,
        /// Issue number
        issue_id: u64,
        /// Open the issue in the browser
        #[arg(long)]
        open: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Associate a GitHub access token with a user
    Login {
        #[arg(long, short = 'u')]
        user: Option<String>,
        /// GitHub OAuth or personal access token
        #[arg(long, env = "GHISSUE_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Remove a user's GitHub credential
    Logout {
        #[arg(long, short = 'u')]
        user: Option<String>,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "ghissue", &mut std::io::stdout());
    }
}
