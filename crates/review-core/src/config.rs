//! ReviewConfig — TOML-backed configuration for the scoring engine.
//!
//! ```toml
//! [scoring]
//! confidence = 0.95
//! top_n = 20
//! numeric_tolerance = 1e-9
//!
//! [rating]
//! min_rating = 1.0
//! max_rating = 5.0
//! trend_tolerance = 0.0
//! ```
//!
//! Every key is optional; missing keys fall back to the defaults above.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_CONFIDENCE, DEFAULT_MAX_RATING, DEFAULT_MIN_RATING,
    DEFAULT_NUMERIC_TOLERANCE, DEFAULT_TOP_N,
};
use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    pub scoring: ScoringConfig,
    pub rating: RatingConfig,
}

/// Settings for vote scoring and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Confidence level of the Wilson interval, strictly inside (0, 1).
    pub confidence: f64,
    /// How many reviews `rank_top_n` surfaces.
    pub top_n: usize,
    /// Rounding slack before an out-of-range bound becomes an error.
    pub numeric_tolerance: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            top_n: DEFAULT_TOP_N,
            numeric_tolerance: DEFAULT_NUMERIC_TOLERANCE,
        }
    }
}

/// Settings for the recency-weighted rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub min_rating: f64,
    pub max_rating: f64,
    /// Half-width of the band in which plain and weighted averages count as
    /// equal. Zero means exact equality.
    pub trend_tolerance: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
            max_rating: DEFAULT_MAX_RATING,
            trend_tolerance: 0.0,
        }
    }
}

impl ReviewConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded review config");
        Self::from_toml(&contents)
    }

    /// Load `review.toml` from `root`, or return defaults when it is absent.
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            debug!(root = %root.display(), "no review config found, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        if !(scoring.confidence > 0.0 && scoring.confidence < 1.0) {
            return Err(ConfigError::Invalid {
                field: "scoring.confidence",
                reason: format!("{} is not strictly between 0 and 1", scoring.confidence),
            });
        }
        if !scoring.numeric_tolerance.is_finite() || scoring.numeric_tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "scoring.numeric_tolerance",
                reason: format!("{} is not a finite non-negative number", scoring.numeric_tolerance),
            });
        }

        let rating = &self.rating;
        if !rating.min_rating.is_finite() || !rating.max_rating.is_finite() {
            return Err(ConfigError::Invalid {
                field: "rating",
                reason: "rating bounds must be finite".to_string(),
            });
        }
        if rating.min_rating > rating.max_rating {
            return Err(ConfigError::Invalid {
                field: "rating.min_rating",
                reason: format!(
                    "min_rating {} exceeds max_rating {}",
                    rating.min_rating, rating.max_rating
                ),
            });
        }
        if !rating.trend_tolerance.is_finite() || rating.trend_tolerance < 0.0 {
            return Err(ConfigError::Invalid {
                field: "rating.trend_tolerance",
                reason: format!("{} is not a finite non-negative number", rating.trend_tolerance),
            });
        }
        Ok(())
    }
}
