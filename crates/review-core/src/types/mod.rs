//! Record types flowing through the scoring engine.

pub mod review;
pub mod scores;

pub use review::ReviewRecord;
pub use scores::{ScoredReview, VoteScores};
