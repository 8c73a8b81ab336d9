//! Defaults shared across crates.

/// Two-tailed confidence level used for the Wilson lower bound.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Number of reviews surfaced on a product detail page.
pub const DEFAULT_TOP_N: usize = 20;

/// How far a computed bound may drift outside [0, 1] before it is treated
/// as a defect instead of rounding residue.
pub const DEFAULT_NUMERIC_TOLERANCE: f64 = 1e-9;

/// Inclusive star-rating domain.
pub const DEFAULT_MIN_RATING: f64 = 1.0;
pub const DEFAULT_MAX_RATING: f64 = 5.0;

/// Environment variable holding the `EnvFilter` directive for logging.
pub const LOG_ENV_VAR: &str = "REVIEW_LOG";

/// Config file looked up under a project root.
pub const CONFIG_FILE_NAME: &str = "review.toml";
