//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::TomataError;

/// Generate shell completions for the specified shell.
///
/// Returns the completion script as a string.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, TomataError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "tomata", &mut buf);
    String::from_utf8(buf).map_err(|e| TomataError::Serialization(format!("UTF-8 error: {e}")))
}
