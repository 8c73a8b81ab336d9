//! Recency-weighted product rating and its comparison with the plain mean.

pub mod recency;
pub mod trend;

pub use recency::{
    plain_average, recency_weight, time_weighted_average, RatingSummary, RecencyWeightedRating,
};
pub use trend::{compare, compare_with_tolerance, RatingTrend};
