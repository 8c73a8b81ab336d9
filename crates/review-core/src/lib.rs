//! # review-core
//!
//! Core types, errors, config, tracing setup, and constants shared by the
//! review ranking crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{RatingConfig, ReviewConfig, ScoringConfig};
pub use errors::{ConfigError, ScoringError};
pub use types::{ReviewRecord, ScoredReview, VoteScores};
