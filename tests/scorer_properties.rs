//! Property tests for the scorer's numeric contract and the classifier's
//! aggregation rules.

mod common;

use common::default_classifier;
use proptest::prelude::*;
use sentimap::classifier::DEFAULT_NEUTRAL_BAND;
use sentimap::{Lexicon, PolarityScorer, SentimentLabel, VaderScorer};
use std::sync::Arc;

fn scorer() -> VaderScorer {
    VaderScorer::new(Arc::new(Lexicon::embedded().unwrap()))
}

fn review_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "I", "love", "hate", "the", "movie", "not", "very", "GREAT", "terrible", "but",
        "however", "good", "bad", "okay", "never", "so", "kind", "of", "least", "at", ":)",
        "fun", "boring", "!", "?", ".", "no",
    ]);
    prop::collection::vec(words, 0..25).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn prop_fractions_sum_to_one(text in any::<String>()) {
        let score = scorer().score(&text);
        prop_assert!(score.pos >= 0.0 && score.neg >= 0.0 && score.neu >= 0.0);
        prop_assert!((score.fraction_sum() - 1.0).abs() < 1e-6);
        prop_assert!((-1.0..=1.0).contains(&score.compound));
    }

    #[test]
    fn prop_review_scores_are_bounded(text in review_text()) {
        let score = scorer().score(&text);
        prop_assert!((score.fraction_sum() - 1.0).abs() < 1e-6);
        prop_assert!((-1.0..=1.0).contains(&score.compound));
    }

    #[test]
    fn prop_scoring_is_deterministic(text in review_text()) {
        let s = scorer();
        prop_assert_eq!(s.score(&text), s.score(&text));
    }

    #[test]
    fn prop_counts_sum_to_sentence_count(text in review_text()) {
        prop_assume!(!text.trim().is_empty());
        let report = default_classifier().classify(&text).unwrap();
        prop_assert_eq!(report.sentiment_counts.total(), report.sentence_analysis.len());
    }

    #[test]
    fn prop_opposing_sentences_mean_mixed(text in review_text()) {
        prop_assume!(!text.trim().is_empty());
        let report = default_classifier().classify(&text).unwrap();
        let counts = report.sentiment_counts;
        if counts.positive > 0 && counts.negative > 0 {
            prop_assert!(report.has_mixed_sentiment);
            prop_assert_eq!(report.overall_sentiment, SentimentLabel::Mixed);
        }
    }

    #[test]
    fn prop_unmarked_units_follow_the_band(text in review_text()) {
        let classifier = default_classifier();
        let unit = classifier.classify_unit(&text);
        prop_assume!(!unit.has_mixed_indicator);
        let compound = unit.score.compound;
        let expected = if compound >= DEFAULT_NEUTRAL_BAND {
            SentimentLabel::Positive
        } else if compound <= -DEFAULT_NEUTRAL_BAND {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        prop_assert_eq!(unit.label, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 8192, ..ProptestConfig::default() })]
    #[test]
    fn prop_marked_weak_units_are_mixed(text in review_text()) {
        let classifier = default_classifier();
        let unit = classifier.classify_unit(&text);
        prop_assume!(unit.has_mixed_indicator && unit.score.compound.abs() < 0.5);
        prop_assert_eq!(unit.label, SentimentLabel::Mixed);
    }
}
