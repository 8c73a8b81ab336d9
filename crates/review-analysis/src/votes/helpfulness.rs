//! Naive helpfulness scores, kept next to the Wilson bound for comparison.
//! Neither is used for ranking.

use review_core::errors::ScoringError;

/// Helpful minus unhelpful votes.
///
/// Favors volume over ratio: 600 up / 400 down outranks 80 up / 20 down.
pub fn score_pos_neg_diff(yes: u32, no: u32) -> i64 {
    i64::from(yes) - i64::from(no)
}

/// Share of helpful votes, `0.0` when nobody voted.
///
/// Blind to sample size: 1/1 and 1000/1000 both score 1.0.
pub fn score_average_rating(yes: u32, total: u32) -> Result<f64, ScoringError> {
    check_counts(yes, total)?;
    if total == 0 {
        return Ok(0.0);
    }
    Ok(f64::from(yes) / f64::from(total))
}

/// `yes <= total`, shared by every vote-count score.
pub(crate) fn check_counts(yes: u32, total: u32) -> Result<(), ScoringError> {
    if yes > total {
        return Err(ScoringError::integrity(
            "helpful_yes",
            format!("{yes} helpful votes exceed {total} total votes"),
        ));
    }
    Ok(())
}
