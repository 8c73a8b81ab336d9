//! VoteScorer — attaches helpfulness scores to every review in a batch.
//!
//! Each review is scored from its own counts only, so batches are scored
//! with a rayon parallel map and collected back in input order.

use rayon::prelude::*;
use tracing::{debug, warn};

use review_core::config::ScoringConfig;
use review_core::errors::ScoringError;
use review_core::types::{ReviewRecord, ScoredReview, VoteScores};

use super::helpfulness::{check_counts, score_average_rating, score_pos_neg_diff};
use super::wilson::WilsonBound;

/// A review that failed validation, with its input position.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedReview {
    pub index: usize,
    pub error: ScoringError,
}

/// Result of scoring a batch under the skip-and-continue policy.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Valid reviews, in input order.
    pub scored: Vec<ScoredReview>,
    /// Invalid reviews, in input order.
    pub rejected: Vec<RejectedReview>,
}

/// Derives `score_pos_neg_diff`, `score_average_rating` and
/// `wilson_lower_bound` for reviews.
#[derive(Debug, Clone)]
pub struct VoteScorer {
    wilson: WilsonBound,
}

impl VoteScorer {
    pub fn new(config: &ScoringConfig) -> Result<Self, ScoringError> {
        Ok(Self {
            wilson: WilsonBound::with_tolerance(config.confidence, config.numeric_tolerance)?,
        })
    }

    /// Scorer at 95% confidence.
    pub fn with_defaults() -> Result<Self, ScoringError> {
        Self::new(&ScoringConfig::default())
    }

    pub fn wilson(&self) -> &WilsonBound {
        &self.wilson
    }

    /// Score raw vote counts.
    pub fn score_votes(&self, yes: u32, total: u32) -> Result<VoteScores, ScoringError> {
        check_counts(yes, total)?;
        self.build(yes, total - yes, total)
    }

    /// Score one review.
    pub fn score(&self, record: &ReviewRecord) -> Result<VoteScores, ScoringError> {
        let helpful_no = record.helpful_no()?;
        self.build(record.helpful_yes, helpful_no, record.total_votes)
    }

    fn build(&self, yes: u32, no: u32, total: u32) -> Result<VoteScores, ScoringError> {
        Ok(VoteScores {
            helpful_no: no,
            score_pos_neg_diff: score_pos_neg_diff(yes, no),
            score_average_rating: score_average_rating(yes, total)?,
            wilson_lower_bound: self.wilson.lower_bound(yes, total)?,
        })
    }

    /// Score a batch, aborting on the lowest-index invalid review.
    pub fn score_batch(&self, records: &[ReviewRecord]) -> Result<Vec<ScoredReview>, ScoringError> {
        let scored = self
            .score_all(records)
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = scored.len(), "scored review batch");
        Ok(scored)
    }

    /// Score a batch, setting reviews with invalid vote counts aside instead
    /// of aborting.
    ///
    /// Only vote counts are checked; ratings and ages are screened by
    /// [`crate::ReviewAnalyzer::analyze_lenient`].
    pub fn score_batch_lenient(&self, records: &[ReviewRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for (index, result) in self.score_all(records).into_iter().enumerate() {
            match result {
                Ok(scored) => outcome.scored.push(scored),
                Err(err) => outcome.rejected.push(RejectedReview {
                    index,
                    error: err.root().clone(),
                }),
            }
        }

        if !outcome.rejected.is_empty() {
            warn!(
                rejected = outcome.rejected.len(),
                scored = outcome.scored.len(),
                "skipped reviews that failed validation"
            );
        }
        outcome
    }

    /// Score reviews tagged with their batch positions, aborting on the
    /// first entry that fails. Used when a batch has already been screened
    /// and the surviving reviews must keep their original indices.
    pub fn score_indexed(
        &self,
        entries: &[(usize, &ReviewRecord)],
    ) -> Result<Vec<ScoredReview>, ScoringError> {
        entries
            .par_iter()
            .map(|&(index, record)| self.score_at(index, record))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    fn score_all(&self, records: &[ReviewRecord]) -> Vec<Result<ScoredReview, ScoringError>> {
        records
            .par_iter()
            .enumerate()
            .map(|(index, record)| self.score_at(index, record))
            .collect()
    }

    fn score_at(&self, index: usize, record: &ReviewRecord) -> Result<ScoredReview, ScoringError> {
        self.score(record)
            .and_then(|scores| ScoredReview::new(index, record.clone(), scores))
            .map_err(|err| err.at_record(index))
    }
}
