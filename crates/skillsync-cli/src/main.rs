mod cmd;
mod output;
mod source;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillsync",
    about = "Install a content tree of agent skills into every directory agents read them from",
    version,
    propagate_version = true
)]
struct Cli {
    /// Content root to install from (default: auto-detect a skills/ directory)
    #[arg(long, global = true, env = "SKILLSYNC_SOURCE")]
    source: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the content root into every target directory (the default)
    Install,

    /// Show the resolved content root and the files it holds
    List,

    /// Show the fixed target directories and whether they exist
    Targets,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let source = cli.source.as_deref();

    let result = match cli.command.unwrap_or(Commands::Install) {
        Commands::Install => cmd::install::run(source, cli.json),
        Commands::List => cmd::list::run(source, cli.json),
        Commands::Targets => cmd::targets::run(cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
