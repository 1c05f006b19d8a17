//! Order scored candidates and keep the best few.

use std::cmp::Ordering;

use crate::Ranked;

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_RESULT_LIMIT: usize = 6;

/// Sort `candidates` and keep at most `limit` of them.
///
/// Candidates are ordered by similarity (descending), then distance
/// (ascending). The sort is stable, so candidates equal on both keys keep
/// their scan order. Fewer than `limit` candidates are returned unchanged in
/// number, and an empty input yields an empty output.
///
/// # Examples
/// ```
/// use forkcast_core::{Identifier, ScoredRestaurant, rank};
///
/// let candidate = |id: i64, similarity_score: f64, distance_km: f64| ScoredRestaurant {
///     restaurant_id: Identifier::Integer(id),
///     restaurant_name: format!("R{id}"),
///     distance_km,
///     similarity_score,
/// };
/// let ranked = rank(
///     vec![candidate(1, 0.8, 5.0), candidate(2, 0.8, 2.0), candidate(3, 0.9, 10.0)],
///     6,
/// );
/// let ids: Vec<_> = ranked.iter().map(|r| r.restaurant_id.to_string()).collect();
/// assert_eq!(ids, ["3", "2", "1"]);
/// ```
#[must_use]
pub fn rank<T: Ranked>(mut candidates: Vec<T>, limit: usize) -> Vec<T> {
    candidates.sort_by(compare);
    candidates.truncate(limit);
    candidates
}

fn compare<T: Ranked>(a: &T, b: &T) -> Ordering {
    b.similarity_score()
        .total_cmp(&a.similarity_score())
        .then_with(|| a.distance_km().total_cmp(&b.distance_km()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Candidate {
        tag: usize,
        similarity: f64,
        distance: f64,
    }

    impl Ranked for Candidate {
        fn similarity_score(&self) -> f64 {
            self.similarity
        }

        fn distance_km(&self) -> f64 {
            self.distance
        }
    }

    fn candidates(keys: &[(f64, f64)]) -> Vec<Candidate> {
        keys.iter()
            .enumerate()
            .map(|(tag, &(similarity, distance))| Candidate {
                tag,
                similarity,
                distance,
            })
            .collect()
    }

    fn keys(ranked: &[Candidate]) -> Vec<(f64, f64)> {
        ranked.iter().map(|c| (c.similarity, c.distance)).collect()
    }

    #[rstest]
    fn similarity_first_then_distance() {
        let ranked = rank(candidates(&[(0.8, 5.0), (0.8, 2.0), (0.9, 10.0)]), 6);
        assert_eq!(keys(&ranked), [(0.9, 10.0), (0.8, 2.0), (0.8, 5.0)]);
    }

    #[rstest]
    fn full_ties_keep_scan_order() {
        let ranked = rank(candidates(&[(0.5, 1.0), (0.7, 3.0), (0.5, 1.0), (0.5, 1.0)]), 6);
        let tags: Vec<usize> = ranked.iter().map(|c| c.tag).collect();
        assert_eq!(tags, [1, 0, 2, 3]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(6, 6)]
    #[case(9, 6)]
    fn truncates_to_limit(#[case] count: usize, #[case] expected: usize) {
        let input: Vec<(f64, f64)> = (0..count).map(|i| (0.5, i as f64)).collect();
        let ranked = rank(candidates(&input), DEFAULT_RESULT_LIMIT);
        assert_eq!(ranked.len(), expected);
    }

    #[rstest]
    fn empty_input_is_not_an_error() {
        let ranked: Vec<Candidate> = rank(Vec::new(), DEFAULT_RESULT_LIMIT);
        assert!(ranked.is_empty());
    }

    proptest! {
        #[test]
        fn output_is_sorted_and_bounded(
            raw in prop::collection::vec((0_u8..=100, 0_u16..=5_000), 0..40),
            limit in 0_usize..10,
        ) {
            let input: Vec<(f64, f64)> = raw
                .iter()
                .map(|&(s, d)| (f64::from(s) / 100.0, f64::from(d) / 10.0))
                .collect();
            let ranked = rank(candidates(&input), limit);
            prop_assert_eq!(ranked.len(), input.len().min(limit));
            for pair in ranked.windows(2) {
                let (first, second) = (&pair[0], &pair[1]);
                prop_assert!(first.similarity >= second.similarity);
                if first.similarity == second.similarity {
                    prop_assert!(first.distance <= second.distance);
                    if first.distance == second.distance {
                        prop_assert!(first.tag < second.tag);
                    }
                }
            }
        }
    }
}
