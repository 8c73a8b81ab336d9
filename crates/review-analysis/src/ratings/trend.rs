//! Categorical comparison of the weighted rating against the plain mean.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction in which recent reviews pull the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTrend {
    /// Weighted average above the plain mean: recent reviews are more positive.
    HigherRecent,
    /// Weighted average below the plain mean: recent reviews are less positive.
    LowerRecent,
    Equal,
}

impl RatingTrend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HigherRecent => "higher_recent",
            Self::LowerRecent => "lower_recent",
            Self::Equal => "equal",
        }
    }
}

impl fmt::Display for RatingTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compare with exact equality.
pub fn compare(plain: f64, weighted: f64) -> RatingTrend {
    compare_with_tolerance(plain, weighted, 0.0)
}

/// Compare, treating differences up to `tolerance` as `Equal`.
pub fn compare_with_tolerance(plain: f64, weighted: f64, tolerance: f64) -> RatingTrend {
    let delta = weighted - plain;
    if delta.abs() <= tolerance {
        RatingTrend::Equal
    } else if delta > 0.0 {
        RatingTrend::HigherRecent
    } else {
        RatingTrend::LowerRecent
    }
}
