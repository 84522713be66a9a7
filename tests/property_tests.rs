//! Property-based tests using proptest

use proptest::prelude::*;
use rapid_tfidf::*;
use std::collections::HashSet;

fn tf_mode() -> impl Strategy<Value = TfMode> {
    prop_oneof![
        Just(TfMode::Binary),
        Just(TfMode::Count),
        Just(TfMode::Freq),
        Just(TfMode::Log),
    ]
}

fn corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("([A-Za-z]{1,6}[ .,!]{0,2}){0,8}", 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_one_paragraph_per_non_empty_document(docs in corpus(), mode in tf_mode()) {
        let paragraphs = compute_tf(&docs, mode, None).unwrap();
        let non_empty = docs.iter().filter(|d| !d.is_empty()).count();
        prop_assert_eq!(paragraphs.len(), non_empty);
    }

    #[test]
    fn test_terms_are_distinct(docs in corpus(), mode in tf_mode()) {
        for paragraph in compute_tf(&docs, mode, None).unwrap() {
            let mut seen = HashSet::new();
            for term in &paragraph.terms {
                prop_assert!(seen.insert(term.word.clone()), "duplicate term {:?}", term.word);
            }
        }
    }

    #[test]
    fn test_tf_mode_ranges(docs in corpus()) {
        let counted = compute_tf(&docs, TfMode::Count, None).unwrap();
        let binary = compute_tf(&docs, TfMode::Binary, None).unwrap();
        let logged = compute_tf(&docs, TfMode::Log, None).unwrap();

        for ((c, b), l) in counted.iter().zip(&binary).zip(&logged) {
            for ((ct, bt), lt) in c.terms.iter().zip(&b.terms).zip(&l.terms) {
                prop_assert!(bt.tf == 0.0 || bt.tf == 1.0);
                prop_assert!(ct.tf >= 1.0 && ct.tf.fract() == 0.0);
                prop_assert_eq!(lt.tf, (1.0 + ct.tf).ln());
            }
        }
    }

    #[test]
    fn test_term_score_is_product(docs in corpus(), mode in tf_mode()) {
        let paragraphs = compute_tf(&docs, mode, None).unwrap();
        let scored = compute_idf(paragraphs, AggMode::Sum).unwrap();
        for paragraph in &scored {
            prop_assert!(paragraph.is_scored());
            for term in &paragraph.terms {
                prop_assert_eq!(term.score(), term.tf * term.idf);
            }
        }
    }

    #[test]
    fn test_avg_is_sum_over_content_terms(docs in corpus()) {
        let tf = compute_tf(&docs, TfMode::Count, Some(&[])).unwrap();

        let summed = compute_idf(tf.clone(), AggMode::Sum).unwrap();
        let averaged = compute_idf(tf, AggMode::Avg).unwrap();

        for (s, a) in summed.iter().zip(&averaged) {
            let n = s.content_terms().count() as f64;
            let expected = s.score.unwrap() / n;
            prop_assert!((a.score.unwrap() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rank_sorted_and_complete(text in "[a-c .!]{0,40}") {
        let table = rank(&text);
        let counts: Vec<usize> = table.iter().map(|(_, c)| c).collect();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(table.total(), tokenize(&text).len());
    }

    #[test]
    fn test_tokens_are_fixed_points(text in "[a-zA-Z0-9 .@$<>/:]{0,40}") {
        for token in tokenize(&text) {
            prop_assert_eq!(tokenize(&token), vec![token.clone()]);
        }
    }
}
