use clap::Parser;
use colored::Colorize;

use tomata::cli::args::{Cli, Commands};
use tomata::cli::commands;
use tomata::config::Durations;
use tomata::error::TomataError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TomataError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let snapshot = tomata::tui::run(Durations::standard())?;
            commands::summary(&snapshot, format)?
        }
        Commands::Plan { sessions } => commands::plan(sessions, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
