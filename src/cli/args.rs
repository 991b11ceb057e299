use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomata")]
#[command(about = "A Pomodoro timer for your terminal")]
#[command(long_about = "tomata - A Pomodoro timer for your terminal

Alternates 25 minute work sessions with 5 minute short breaks, closing
every cycle of four work sessions with a 15 minute long break. The timer
runs as a full-screen terminal UI with a countdown, a progress gauge, and
one checkmark per completed work session.

QUICK START:
  tomata                    Run the timer
  tomata plan               See where the long break falls
  tomata plan -s 16 -o json The next two cycles, as JSON

KEYS (inside the timer):
  s / Enter   start or resume    p   pause
  r           reset              q   quit

For more information on a specific command, run:
  tomata <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer (default)
    ///
    /// Opens the full-screen countdown. Starting from idle begins a work
    /// session; each completed session rings the terminal bell and chains
    /// straight into the next one. On quit, a summary of completed work
    /// sessions is printed.
    ///
    /// # Examples
    ///
    ///   tomata                    Run the timer
    ///   tomata run                Same thing, spelled out
    ///   tomata run -o json        JSON summary on quit
    #[command(alias = "r")]
    Run,

    /// Print the upcoming session cadence
    ///
    /// Lists the sessions the cadence rule yields from a fresh start:
    /// work and short breaks alternating, with every 8th repetition a
    /// long break. Purely informational; interval lengths are fixed.
    ///
    /// # Examples
    ///
    ///   tomata plan               The first full cycle (8 sessions)
    ///   tomata plan -s 16         Two cycles
    ///   tomata plan -o json       As JSON for scripting
    #[command(alias = "p")]
    Plan {
        /// Number of sessions to list
        #[arg(short, long, default_value_t = 8)]
        sessions: u32,
    },

    /// Generate shell completion scripts
    ///
    /// # Examples
    ///
    ///   tomata completions bash > /usr/local/etc/bash_completion.d/tomata
    ///   tomata completions zsh > ~/.zsh/completions/_tomata
    ///   tomata completions fish | source
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
