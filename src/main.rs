use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use priorank::commands::{cmd_available, cmd_rank, InputFormat};
use priorank::config::Config;
use priorank::error::{PriorankError, Result};
use priorank::tui::run_tui;

#[derive(Parser)]
#[command(name = "priorank")]
#[command(about = "Rank tasks by importance and urgency", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank tasks read from a file or stdin
    Rank {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Input format
        #[arg(short, long, value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,
        /// Show importance, urgency and the priority calculation
        #[arg(short, long)]
        all: bool,
        /// Print the ranking as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// List importance values not yet assigned to any task
    Available {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Input format
        #[arg(short, long, value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open the interactive wizard
    Ui,
}

fn completions(shell: &str) -> Result<()> {
    let shell_enum = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => return Err(PriorankError::UnsupportedShell(shell.to_string())),
    };
    let mut cmd = Cli::command();
    generate(shell_enum, &mut cmd, "priorank", &mut io::stdout());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    match cli.command {
        Some(Commands::Rank { file, format, all, json }) => cmd_rank(file.as_deref(), format, all, json, &config),
        Some(Commands::Available { file, format }) => cmd_available(file.as_deref(), format, &config),
        Some(Commands::Completions { shell }) => completions(&shell),
        Some(Commands::Ui) | None => run_tui(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
