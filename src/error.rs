//! Error types for tomata.

use thiserror::Error;

/// All failure classes in tomata.
///
/// The scheduler itself never fails: every operation is total over the
/// state machine. Errors only arise at the configuration boundary and at
/// the terminal/serialization edges.
#[derive(Error, Debug)]
pub enum TomataError {
    /// Invalid construction-time configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup, teardown, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Output serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
