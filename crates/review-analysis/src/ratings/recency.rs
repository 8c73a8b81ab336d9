//! RecencyWeightedRating — product rating that favors recent reviews.
//!
//! Each review is weighted by `1 / (days_since_review + 1)`: same-day reviews
//! weigh 1.0 and the weight falls strictly as reviews age. Aggregates are
//! plain sequential sums so repeated runs report identical values.

use serde::{Deserialize, Serialize};
use tracing::info;

use review_core::config::RatingConfig;
use review_core::errors::ScoringError;
use review_core::types::ReviewRecord;

use super::trend::{compare_with_tolerance, RatingTrend};

/// Both averages for one product and how they compare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub review_count: usize,
    pub plain_average: f64,
    pub time_weighted_average: f64,
    pub trend: RatingTrend,
}

/// Weight of a review posted `days` ago.
pub fn recency_weight(days: f64) -> Result<f64, ScoringError> {
    if !days.is_finite() || days < 0.0 {
        return Err(ScoringError::integrity(
            "days_since_review",
            format!("{days} is not a finite non-negative day count"),
        ));
    }
    Ok(1.0 / (days + 1.0))
}

/// Plain mean over the default 1–5 rating domain.
pub fn plain_average(records: &[ReviewRecord]) -> Result<f64, ScoringError> {
    RecencyWeightedRating::with_defaults().plain_average(records)
}

/// Recency-weighted mean over the default 1–5 rating domain.
pub fn time_weighted_average(records: &[ReviewRecord]) -> Result<f64, ScoringError> {
    RecencyWeightedRating::with_defaults().time_weighted_average(records)
}

/// Computes plain and recency-weighted ratings for a set of reviews.
#[derive(Debug, Clone)]
pub struct RecencyWeightedRating {
    min_rating: f64,
    max_rating: f64,
    trend_tolerance: f64,
}

impl RecencyWeightedRating {
    pub fn new(config: &RatingConfig) -> Self {
        Self {
            min_rating: config.min_rating,
            max_rating: config.max_rating,
            trend_tolerance: config.trend_tolerance.max(0.0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&RatingConfig::default())
    }

    /// Arithmetic mean of `rating`.
    ///
    /// An empty set is an error, never `0.0`: "no reviews" and "rated zero"
    /// are different answers.
    pub fn plain_average(&self, records: &[ReviewRecord]) -> Result<f64, ScoringError> {
        if records.is_empty() {
            return Err(ScoringError::EmptyInput {
                operation: "plain_average",
            });
        }

        let mut sum = 0.0;
        for (index, record) in records.iter().enumerate() {
            sum += self.checked_rating(record).map_err(|err| err.at_record(index))?;
        }
        Ok(sum / records.len() as f64)
    }

    /// `Σ rating·w / Σ w` with `w = 1 / (days + 1)`.
    pub fn time_weighted_average(&self, records: &[ReviewRecord]) -> Result<f64, ScoringError> {
        if records.is_empty() {
            return Err(ScoringError::EmptyInput {
                operation: "time_weighted_average",
            });
        }

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;
        for (index, record) in records.iter().enumerate() {
            let rating = self.checked_rating(record).map_err(|err| err.at_record(index))?;
            let weight = recency_weight(record.days_since_review).map_err(|err| err.at_record(index))?;
            weighted_sum += rating * weight;
            total_weight += weight;
        }
        Ok(weighted_sum / total_weight)
    }

    pub fn compare(&self, plain: f64, weighted: f64) -> RatingTrend {
        compare_with_tolerance(plain, weighted, self.trend_tolerance)
    }

    /// Both averages plus their comparison.
    pub fn summarize(&self, records: &[ReviewRecord]) -> Result<RatingSummary, ScoringError> {
        let plain = self.plain_average(records)?;
        let weighted = self.time_weighted_average(records)?;
        let trend = self.compare(plain, weighted);

        info!(
            reviews = records.len(),
            plain_average = plain,
            time_weighted_average = weighted,
            trend = %trend,
            "computed product rating"
        );

        Ok(RatingSummary {
            review_count: records.len(),
            plain_average: plain,
            time_weighted_average: weighted,
            trend,
        })
    }

    /// Check the fields this component reads: rating domain, then age.
    pub fn validate(&self, record: &ReviewRecord) -> Result<(), ScoringError> {
        self.checked_rating(record)?;
        recency_weight(record.days_since_review)?;
        Ok(())
    }

    fn checked_rating(&self, record: &ReviewRecord) -> Result<f64, ScoringError> {
        let rating = record.rating;
        if !(rating >= self.min_rating && rating <= self.max_rating) {
            return Err(ScoringError::integrity(
                "rating",
                format!(
                    "{rating} is outside [{}, {}]",
                    self.min_rating, self.max_rating
                ),
            ));
        }
        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: f64, days: f64) -> ReviewRecord {
        ReviewRecord::new(rating, 0, 0, days)
    }

    #[test]
    fn test_weight_decreases_with_age() {
        assert_eq!(recency_weight(0.0), Ok(1.0));
        let w1 = recency_weight(1.0).unwrap();
        let w30 = recency_weight(30.0).unwrap();
        let w365 = recency_weight(365.0).unwrap();
        assert!((w1 - 0.5).abs() < 1e-12);
        assert!(1.0 > w1 && w1 > w30 && w30 > w365);
    }

    #[test]
    fn test_weight_rejects_negative_days() {
        assert!(recency_weight(-1.0).unwrap_err().is_data_integrity());
        assert!(recency_weight(f64::NAN).unwrap_err().is_data_integrity());
        assert!(recency_weight(f64::INFINITY).unwrap_err().is_data_integrity());
    }

    #[test]
    fn test_recent_positive_review_lifts_rating() {
        let records = vec![review(5.0, 0.0), review(1.0, 100.0)];
        let plain = plain_average(&records).unwrap();
        let weighted = time_weighted_average(&records).unwrap();
        assert!((plain - 3.0).abs() < 1e-12);
        assert!((weighted - 4.960_784_313_725_49).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_age_matches_plain_mean() {
        let records = vec![review(5.0, 30.0), review(2.0, 30.0), review(4.0, 30.0)];
        let plain = plain_average(&records).unwrap();
        let weighted = time_weighted_average(&records).unwrap();
        assert!((plain - weighted).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(matches!(
            plain_average(&[]),
            Err(ScoringError::EmptyInput { operation: "plain_average" })
        ));
        assert!(matches!(
            time_weighted_average(&[]),
            Err(ScoringError::EmptyInput { operation: "time_weighted_average" })
        ));
    }

    #[test]
    fn test_negative_days_reports_record() {
        let records = vec![review(4.0, 2.0), review(5.0, -3.0)];
        let err = time_weighted_average(&records).unwrap_err();
        assert!(matches!(err, ScoringError::RecordRejected { index: 1, .. }));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_rating_outside_domain() {
        let records = vec![review(6.0, 2.0)];
        assert!(plain_average(&records).unwrap_err().is_data_integrity());
        let records = vec![review(f64::NAN, 2.0)];
        assert!(time_weighted_average(&records).unwrap_err().is_data_integrity());
    }

    #[test]
    fn test_custom_rating_domain() {
        let ratings = RecencyWeightedRating::new(&RatingConfig {
            min_rating: 0.0,
            max_rating: 10.0,
            trend_tolerance: 0.0,
        });
        let records = vec![review(8.0, 0.0), review(10.0, 0.0)];
        assert_eq!(ratings.plain_average(&records), Ok(9.0));
    }

    #[test]
    fn test_summarize() {
        let ratings = RecencyWeightedRating::with_defaults();
        let records = vec![review(1.0, 0.0), review(5.0, 200.0), review(5.0, 400.0)];
        let summary = ratings.summarize(&records).unwrap();
        assert_eq!(summary.review_count, 3);
        assert!(summary.time_weighted_average < summary.plain_average);
        assert_eq!(summary.trend, RatingTrend::LowerRecent);
    }

    #[test]
    fn test_summarize_with_tolerance() {
        let ratings = RecencyWeightedRating::new(&RatingConfig {
            trend_tolerance: 0.5,
            ..RatingConfig::default()
        });
        let records = vec![review(4.0, 0.0), review(5.0, 3.0)];
        let summary = ratings.summarize(&records).unwrap();
        assert_eq!(summary.trend, RatingTrend::Equal);
    }

    #[test]
    fn test_validate_checks_rating_then_age() {
        let ratings = RecencyWeightedRating::with_defaults();
        assert!(ratings.validate(&review(4.0, 10.0)).is_ok());

        let err = ratings.validate(&review(9.0, -2.0)).unwrap_err();
        assert!(matches!(err, ScoringError::DataIntegrity { field: "rating", .. }));

        let err = ratings.validate(&review(4.0, -2.0)).unwrap_err();
        assert!(matches!(err, ScoringError::DataIntegrity { field: "days_since_review", .. }));
    }
}
