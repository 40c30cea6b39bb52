use anyhow::Result;
use clap::{Parser, Subcommand};
use sarraf::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display gold and metal quotes
    Metals,
    /// Display currency quotes
    Currencies,
}

impl From<Commands> for sarraf::AppCommand {
    fn from(cmd: Commands) -> sarraf::AppCommand {
        match cmd {
            Commands::Metals => sarraf::AppCommand::Metals,
            Commands::Currencies => sarraf::AppCommand::Currencies,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // No subcommand shows every category
    let command = cli.command.map_or(sarraf::AppCommand::All, Into::into);
    let result = sarraf::run_command(command, cli.config_path.as_deref()).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
