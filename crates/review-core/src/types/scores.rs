//! Derived per-review scores.

use serde::{Deserialize, Serialize};

use super::review::ReviewRecord;
use crate::errors::ScoringError;

/// Helpfulness scores derived from one review's vote counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoteScores {
    /// `total_votes - helpful_yes`.
    pub helpful_no: u32,
    /// `helpful_yes - helpful_no`.
    pub score_pos_neg_diff: i64,
    /// Share of helpful votes in [0, 1]; 0 when nobody voted.
    pub score_average_rating: f64,
    /// Lower end of the Wilson score interval in [0, 1].
    pub wilson_lower_bound: f64,
}

impl VoteScores {
    /// Both ratio scores must be numbers in [0, 1].
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !(0.0..=1.0).contains(&self.wilson_lower_bound) {
            return Err(ScoringError::NumericDomain {
                value: self.wilson_lower_bound,
            });
        }
        if !(0.0..=1.0).contains(&self.score_average_rating) {
            return Err(ScoringError::integrity(
                "score_average_rating",
                format!("{} is outside [0, 1]", self.score_average_rating),
            ));
        }
        Ok(())
    }
}

/// A review paired with its derived scores and its position in the input.
///
/// Scores are checked at construction and deserialization, and cannot be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScoredReview")]
pub struct ScoredReview {
    index: usize,
    record: ReviewRecord,
    scores: VoteScores,
}

#[derive(Deserialize)]
struct RawScoredReview {
    index: usize,
    record: ReviewRecord,
    scores: VoteScores,
}

impl TryFrom<RawScoredReview> for ScoredReview {
    type Error = ScoringError;

    fn try_from(raw: RawScoredReview) -> Result<Self, Self::Error> {
        Self::new(raw.index, raw.record, raw.scores)
    }
}

impl ScoredReview {
    /// Fails when a ratio score is NaN or outside [0, 1].
    pub fn new(index: usize, record: ReviewRecord, scores: VoteScores) -> Result<Self, ScoringError> {
        scores.validate()?;
        Ok(Self {
            index,
            record,
            scores,
        })
    }

    /// Position of the record in the batch it was scored from.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record(&self) -> &ReviewRecord {
        &self.record
    }

    pub fn scores(&self) -> &VoteScores {
        &self.scores
    }

    pub fn wilson_lower_bound(&self) -> f64 {
        self.scores.wilson_lower_bound
    }

    pub fn into_record(self) -> ReviewRecord {
        self.record
    }
}
