//! Ranking by Wilson lower bound.
//!
//! Order: bound descending, then input index ascending. Equal
//! bounds therefore keep the order the reviews were supplied in.

use std::cmp::Ordering;

use review_core::types::ScoredReview;

/// The `n` best-ranked reviews, or all of them when fewer than `n` exist.
pub fn rank_top_n(scored: &[ScoredReview], n: usize) -> Vec<ScoredReview> {
    let mut ranked: Vec<&ScoredReview> = scored.iter().collect();
    ranked.sort_by(|a, b| by_rank(a, b));
    ranked.into_iter().take(n).cloned().collect()
}

/// Every review in rank order.
pub fn rank_all(scored: &[ScoredReview]) -> Vec<ScoredReview> {
    rank_top_n(scored, scored.len())
}

fn by_rank(a: &ScoredReview, b: &ScoredReview) -> Ordering {
    rank_order((a.wilson_lower_bound(), a.index()), (b.wilson_lower_bound(), b.index()))
}

/// Total order over `(bound, index)`: bound descending, index ascending.
/// NaN sorts last and `-0.0` ties with `0.0`.
fn rank_order(a: (f64, usize), b: (f64, usize)) -> Ordering {
    rank_key(b.0)
        .total_cmp(&rank_key(a.0))
        .then_with(|| a.1.cmp(&b.1))
}

fn rank_key(bound: f64) -> f64 {
    if bound.is_nan() {
        f64::NEG_INFINITY
    } else {
        bound + 0.0
    }
}
