//! ReviewRecord — one customer review as supplied by the ingestion layer.

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// A single customer review.
///
/// Identity fields are opaque payload; scoring only reads `rating`,
/// `helpful_yes`, `total_votes` and `days_since_review`. Serde aliases accept
/// the column names of the Amazon review export (`overall`, `day_diff`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default, alias = "reviewerID")]
    pub reviewer_id: String,
    #[serde(default, alias = "asin")]
    pub product_id: String,
    #[serde(default, alias = "reviewerName")]
    pub reviewer_name: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, alias = "reviewText")]
    pub review_text: String,
    /// Star rating, bounded by the configured rating domain.
    #[serde(alias = "overall")]
    pub rating: f64,
    /// Votes marking the review as helpful.
    pub helpful_yes: u32,
    /// All votes cast; must be at least `helpful_yes`.
    #[serde(alias = "total_vote")]
    pub total_votes: u32,
    /// Elapsed days since the review was posted.
    #[serde(alias = "day_diff")]
    pub days_since_review: f64,
}

impl ReviewRecord {
    pub fn new(rating: f64, helpful_yes: u32, total_votes: u32, days_since_review: f64) -> Self {
        Self {
            rating,
            helpful_yes,
            total_votes,
            days_since_review,
            ..Self::default()
        }
    }

    pub fn with_reviewer(mut self, reviewer_id: impl Into<String>) -> Self {
        self.reviewer_id = reviewer_id.into();
        self
    }

    pub fn with_text(mut self, summary: impl Into<String>, review_text: impl Into<String>) -> Self {
        self.summary = summary.into();
        self.review_text = review_text.into();
        self
    }

    /// Unhelpful votes, derived as `total_votes - helpful_yes`.
    ///
    /// Fails instead of clamping when the record claims more helpful votes
    /// than votes cast.
    pub fn helpful_no(&self) -> Result<u32, ScoringError> {
        self.total_votes.checked_sub(self.helpful_yes).ok_or_else(|| {
            ScoringError::integrity(
                "total_votes",
                format!(
                    "total_votes ({}) is smaller than helpful_yes ({})",
                    self.total_votes, self.helpful_yes
                ),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpful_no_derived() {
        let record = ReviewRecord::new(4.0, 3, 10, 12.0);
        assert_eq!(record.helpful_no(), Ok(7));
    }

    #[test]
    fn test_helpful_no_rejects_inverted_counts() {
        let record = ReviewRecord::new(4.0, 11, 10, 12.0);
        let err = record.helpful_no().unwrap_err();
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_deserialize_export_columns() {
        let json = r#"{
            "reviewerID": "A3SBTW3WS4IQSN",
            "asin": "B007WTAJTO",
            "overall": 4.0,
            "helpful_yes": 0,
            "total_vote": 0,
            "day_diff": 138
        }"#;
        let record: ReviewRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.reviewer_id, "A3SBTW3WS4IQSN");
        assert_eq!(record.product_id, "B007WTAJTO");
        assert_eq!(record.rating, 4.0);
        assert_eq!(record.days_since_review, 138.0);
        assert!(record.reviewer_name.is_none());
    }
}
