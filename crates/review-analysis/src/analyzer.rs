//! ReviewAnalyzer — runs vote scoring, ranking and the recency rating over
//! one batch of reviews.

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use review_core::config::ReviewConfig;
use review_core::errors::ScoringError;
use review_core::types::{ReviewRecord, ScoredReview};

use crate::ratings::{RatingSummary, RecencyWeightedRating};
use crate::votes::{rank_top_n, RejectedReview, VoteScorer};

/// Everything computed for one product's reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewReport {
    /// Every scored review, in input order.
    pub scored: Vec<ScoredReview>,
    /// The best reviews by Wilson lower bound.
    pub top_reviews: Vec<ScoredReview>,
    pub ratings: RatingSummary,
}

/// Result of [`ReviewAnalyzer::analyze_lenient`].
#[derive(Debug, Clone)]
pub struct LenientAnalysis {
    /// Report over the reviews that passed validation.
    pub report: ReviewReport,
    /// Reviews set aside, in input order.
    pub rejected: Vec<RejectedReview>,
}

impl ReviewReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Entry point configured from a single [`ReviewConfig`].
#[derive(Debug, Clone)]
pub struct ReviewAnalyzer {
    scorer: VoteScorer,
    ratings: RecencyWeightedRating,
    top_n: usize,
}

impl ReviewAnalyzer {
    pub fn new(config: &ReviewConfig) -> Result<Self, ScoringError> {
        Ok(Self {
            scorer: VoteScorer::new(&config.scoring)?,
            ratings: RecencyWeightedRating::new(&config.rating),
            top_n: config.scoring.top_n,
        })
    }

    pub fn with_defaults() -> Result<Self, ScoringError> {
        Self::new(&ReviewConfig::default())
    }

    pub fn scorer(&self) -> &VoteScorer {
        &self.scorer
    }

    pub fn ratings(&self) -> &RecencyWeightedRating {
        &self.ratings
    }

    /// Check every invariant of one review: vote counts, then rating
    /// domain, then age.
    pub fn validate(&self, record: &ReviewRecord) -> Result<(), ScoringError> {
        record.helpful_no()?;
        self.ratings.validate(record)
    }

    /// Score, rank and summarize `records`.
    ///
    /// Every review is validated in input order before anything is computed,
    /// so an invalid batch fails with the lowest offending index whatever
    /// the kind of violation. Use [`Self::analyze_lenient`] to skip bad
    /// reviews instead.
    pub fn analyze(&self, records: &[ReviewRecord]) -> Result<ReviewReport, ScoringError> {
        let _span = info_span!("analyze_reviews", reviews = records.len()).entered();

        for (index, record) in records.iter().enumerate() {
            self.validate(record).map_err(|err| err.at_record(index))?;
        }

        let ratings = self.ratings.summarize(records)?;
        let scored = self.scorer.score_batch(records)?;
        Ok(self.report(scored, ratings))
    }

    /// Like [`Self::analyze`], but reviews failing [`Self::validate`] are set
    /// aside and reported instead of aborting the batch.
    ///
    /// Kept reviews retain their original input index. Fails with
    /// `EmptyInput` when no review survives.
    pub fn analyze_lenient(&self, records: &[ReviewRecord]) -> Result<LenientAnalysis, ScoringError> {
        let _span = info_span!("analyze_reviews_lenient", reviews = records.len()).entered();

        let mut kept: Vec<(usize, &ReviewRecord)> = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();
        for (index, record) in records.iter().enumerate() {
            match self.validate(record) {
                Ok(()) => kept.push((index, record)),
                Err(error) => rejected.push(RejectedReview { index, error }),
            }
        }

        if !rejected.is_empty() {
            warn!(
                rejected = rejected.len(),
                kept = kept.len(),
                "skipped reviews that failed validation"
            );
        }

        let kept_records: Vec<ReviewRecord> = kept.iter().map(|&(_, record)| record.clone()).collect();
        let ratings = self.ratings.summarize(&kept_records)?;
        let scored = self.scorer.score_indexed(&kept)?;

        Ok(LenientAnalysis {
            report: self.report(scored, ratings),
            rejected,
        })
    }

    fn report(&self, scored: Vec<ScoredReview>, ratings: RatingSummary) -> ReviewReport {
        let top_reviews = rank_top_n(&scored, self.top_n);

        info!(
            top = top_reviews.len(),
            best_wilson = top_reviews.first().map(ScoredReview::wilson_lower_bound),
            "ranked reviews"
        );

        ReviewReport {
            scored,
            top_reviews,
            ratings,
        }
    }
}
