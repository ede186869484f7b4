pub mod file_scorer;
pub mod grade;

pub use file_scorer::FileScorer;
pub use grade::Grade;

/// Percentage of clean functions. A file without functions passes
/// vacuously with 100.
pub fn completeness_score(ok: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (ok.min(total) as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_completeness_score_exact_fractions() {
        assert_eq!(completeness_score(0, 0), 100.0);
        assert_eq!(completeness_score(1, 2), 50.0);
        assert_eq!(completeness_score(3, 4), 75.0);
        assert_eq!(completeness_score(0, 5), 0.0);
        assert_eq!(completeness_score(5, 5), 100.0);
    }

    proptest! {
        #[test]
        fn prop_score_stays_in_range(total in 1usize..500, ok in 0usize..500) {
            let ok = ok % (total + 1);
            let score = completeness_score(ok, total);
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn prop_score_is_monotonic(total in 1usize..500, ok in 0usize..500) {
            let ok = ok % total;
            prop_assert!(completeness_score(ok, total) < completeness_score(ok + 1, total));
        }
    }
}
