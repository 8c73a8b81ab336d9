//! Vote-based helpfulness scoring: raw difference, helpful ratio, Wilson
//! lower bound, and ranking by the bound.

pub mod helpfulness;
pub mod ranking;
pub mod scorer;
pub mod wilson;

pub use helpfulness::{score_average_rating, score_pos_neg_diff};
pub use ranking::{rank_all, rank_top_n};
pub use scorer::{BatchOutcome, RejectedReview, VoteScorer};
pub use wilson::{wilson_lower_bound, z_score, WilsonBound};
