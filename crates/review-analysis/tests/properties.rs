//! Property tests for the scoring engine.

use proptest::prelude::*;

use review_analysis::ratings::{plain_average, recency_weight, time_weighted_average};
use review_analysis::votes::{rank_top_n, score_average_rating, score_pos_neg_diff, VoteScorer, WilsonBound};
use review_core::types::ReviewRecord;

/// `(yes, total)` with `yes <= total` and at least one vote.
fn votes() -> impl Strategy<Value = (u32, u32)> {
    (1u32..5_000).prop_flat_map(|total| (0..=total, Just(total)))
}

fn review() -> impl Strategy<Value = ReviewRecord> {
    (1u32..=5, votes(), 0u32..2_000).prop_map(|(rating, (yes, total), days)| {
        ReviewRecord::new(f64::from(rating), yes, total, f64::from(days))
    })
}

proptest! {
    #[test]
    fn wilson_never_exceeds_ratio((yes, total) in votes()) {
        let wilson = WilsonBound::with_defaults().unwrap();
        let bound = wilson.lower_bound(yes, total).unwrap();
        let ratio = score_average_rating(yes, total).unwrap();
        prop_assert!(bound >= 0.0);
        prop_assert!(bound <= ratio + 1e-12, "{yes}/{total}: {bound} > {ratio}");
        prop_assert!(ratio <= 1.0);
    }

    #[test]
    fn wilson_grows_with_sample_size((yes, total) in votes(), factor in 2u32..50) {
        let wilson = WilsonBound::with_defaults().unwrap();
        let small = wilson.lower_bound(yes, total).unwrap();
        let large = wilson.lower_bound(yes * factor, total * factor).unwrap();
        prop_assert!(large >= small - 1e-12, "{yes}/{total} x{factor}: {large} < {small}");
    }

    #[test]
    fn pos_neg_diff_is_exact(yes in any::<u32>(), no in any::<u32>()) {
        prop_assert_eq!(score_pos_neg_diff(yes, no), i64::from(yes) - i64::from(no));
    }

    #[test]
    fn yes_above_total_is_rejected(total in 0u32..1_000, extra in 1u32..1_000) {
        let scorer = VoteScorer::with_defaults().unwrap();
        let err = scorer.score_votes(total + extra, total).unwrap_err();
        prop_assert!(err.is_data_integrity());
    }

    #[test]
    fn uniform_age_reduces_to_plain_mean(
        ratings in prop::collection::vec(1u32..=5, 1..200),
        days in 0u32..3_000,
    ) {
        let records: Vec<ReviewRecord> = ratings
            .iter()
            .map(|&r| ReviewRecord::new(f64::from(r), 0, 0, f64::from(days)))
            .collect();
        let plain = plain_average(&records).unwrap();
        let weighted = time_weighted_average(&records).unwrap();
        prop_assert!((plain - weighted).abs() < 1e-9);
    }

    #[test]
    fn weighted_average_stays_in_rating_domain(records in prop::collection::vec(review(), 1..100)) {
        let weighted = time_weighted_average(&records).unwrap();
        prop_assert!((1.0 - 1e-9..=5.0 + 1e-9).contains(&weighted));
    }

    #[test]
    fn recency_weight_strictly_decreasing(a in 0u32..100_000, gap in 1u32..1_000) {
        let newer = recency_weight(f64::from(a)).unwrap();
        let older = recency_weight(f64::from(a + gap)).unwrap();
        prop_assert!(newer > older);
    }

    #[test]
    fn ranking_is_sorted_and_bounded(records in prop::collection::vec(review(), 0..60), n in 0usize..80) {
        let scorer = VoteScorer::with_defaults().unwrap();
        let scored = scorer.score_batch(&records).unwrap();
        let top = rank_top_n(&scored, n);

        prop_assert_eq!(top.len(), n.min(records.len()));
        for pair in top.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.wilson_lower_bound() >= b.wilson_lower_bound());
            if a.wilson_lower_bound() == b.wilson_lower_bound() {
                prop_assert!(a.index() < b.index());
            }
        }
    }
}

#[test]
fn equal_ratio_larger_sample_ranks_higher() {
    let scorer = VoteScorer::with_defaults().unwrap();
    let records = vec![
        ReviewRecord::new(5.0, 10, 10, 1.0).with_reviewer("A"),
        ReviewRecord::new(5.0, 1000, 1000, 1.0).with_reviewer("B"),
    ];
    let scored = scorer.score_batch(&records).unwrap();
    assert_eq!(
        scored[0].scores().score_average_rating,
        scored[1].scores().score_average_rating
    );
    assert!(scored[0].wilson_lower_bound() < scored[1].wilson_lower_bound());

    let top = rank_top_n(&scored, 20);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].record().reviewer_id, "B");
}
