//! # review-analysis
//!
//! Scoring engine for product reviews. Contains vote scoring (helpfulness
//! ratio, Wilson lower bound, ranking), the recency-weighted rating, and the
//! analyzer that runs both over one batch.

pub mod analyzer;
pub mod ratings;
pub mod votes;

pub use analyzer::{LenientAnalysis, ReviewAnalyzer, ReviewReport};
pub use ratings::{RatingSummary, RatingTrend, RecencyWeightedRating};
pub use votes::{rank_top_n, BatchOutcome, VoteScorer, WilsonBound};
