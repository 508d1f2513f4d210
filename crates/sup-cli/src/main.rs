mod cmd;
mod locate;
mod output;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, Session};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sup",
    about = "Render a project's standup notes as markdown for chat",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ~/.config/sup/config.yaml)
    #[arg(long, global = true, env = "SUP_CONFIG")]
    config: Option<PathBuf>,

    /// Standup file (default: config, then ./standup.yaml upward, then ~/standup.yaml)
    #[arg(long, global = true, env = "SUP_FILE")]
    file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log debug diagnostics to stderr
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a project's standup as markdown
    #[command(alias = "s")]
    Show {
        /// Project code, matched exactly
        project: String,

        /// Put your configured identity at the top
        #[arg(short = 'n', long)]
        name_header: bool,

        /// Search term for the next speaker ("disc" for Discussion)
        #[arg(short = 't', long)]
        tail: Option<String>,

        /// Template file (default: config, then the built-in template)
        #[arg(long, env = "SUP_TEMPLATE")]
        template: Option<PathBuf>,
    },

    /// List the projects in the standup file
    #[command(alias = "l")]
    List,

    /// List the next-speaker candidates for a project, in match order
    Members {
        /// Project code, matched exactly
        project: String,
    },

    /// Open the standup file in an editor
    #[command(alias = "e")]
    Edit {
        /// Editor command (default: config, then the system opener)
        #[arg(long, env = "EDITOR")]
        editor: Option<String>,
    },

    /// Print the last standup from the IRC log whose name matches PATTERN
    #[command(alias = "f")]
    Format {
        /// Substring of the IRC log file name
        #[arg(default_value = "")]
        pattern: String,

        /// IRC log directory (default: irc.log_dir from config)
        #[arg(long, env = "SUP_IRC_LOG_DIR")]
        log_dir: Option<PathBuf>,
    },

    /// Write a starter config and template if missing
    Init {
        /// Your display name for the identity header
        #[arg(long)]
        name: Option<String>,

        /// Your chat handle for the identity header
        #[arg(long)]
        username: Option<String>,
    },

    /// Inspect and validate the config
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let session = Session::load(cli.config.as_deref(), cli.file, cli.json)?;

    match cli.command {
        Commands::Show {
            project,
            name_header,
            tail,
            template,
        } => cmd::show::run(
            &session,
            &project,
            name_header,
            tail.as_deref(),
            template.as_deref(),
        ),
        Commands::List => cmd::list::run(&session),
        Commands::Members { project } => cmd::members::run(&session, &project),
        Commands::Edit { editor } => cmd::edit::run(&session, editor.as_deref()),
        Commands::Format { pattern, log_dir } => {
            cmd::format::run(&session, &pattern, log_dir.as_deref())
        }
        Commands::Init { name, username } => cmd::init::run(&session, name, username),
        Commands::Config { subcommand } => cmd::config::run(&session, subcommand),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout carries the rendered markdown; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
