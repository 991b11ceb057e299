//! Configuration for tomata.
//!
//! There is no settings file: durations are fixed at construction and
//! nothing is persisted between runs.

mod settings;

pub use settings::Durations;
