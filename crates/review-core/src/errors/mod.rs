//! Error types, one enum per subsystem.

mod config_error;
mod scoring_error;

pub use config_error::ConfigError;
pub use scoring_error::ScoringError;
