//! End-to-end classification over the embedded lexicon.

mod common;

use common::{default_classifier, FixedScorer};
use pretty_assertions::assert_eq;
use sentimap::{Error, SentimentClassifier, SentimentCounts, SentimentLabel};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_plain_positive_text() {
    let report = default_classifier().classify("I love this product.").unwrap();

    assert_eq!(report.overall_sentiment, SentimentLabel::Positive);
    assert_close(report.polarity, 0.6369);
    assert!(!report.has_mixed_sentiment);
    assert_eq!(report.sentence_analysis.len(), 1);
    assert_eq!(report.sentence_analysis[0].text, "I love this product.");
    assert_eq!(report.sentiment_counts.positive, 1);
}

#[test]
fn test_contrast_within_one_sentence_is_mixed() {
    let report = default_classifier()
        .classify("The food was great, but the service was terrible.")
        .unwrap();

    assert_eq!(report.overall_sentiment, SentimentLabel::Mixed);
    assert!(report.has_mixed_sentiment);
    assert_close(report.polarity, -0.3818);
    assert_eq!(
        report.sentiment_counts,
        SentimentCounts {
            positive: 0,
            negative: 0,
            neutral: 0,
            mixed: 1,
        }
    );
}

#[test]
fn test_factual_text_is_neutral() {
    let report = default_classifier()
        .classify("The meeting is at 3pm.")
        .unwrap();

    assert_eq!(report.overall_sentiment, SentimentLabel::Neutral);
    assert_eq!(report.polarity, 0.0);
    assert!(!report.has_mixed_sentiment);
    assert_eq!(report.sentiment_counts.neutral, 1);
}

#[test]
fn test_everyday_vocabulary_is_scored() {
    let classifier = default_classifier();
    for text in ["The trip was ruined.", "I am so tired.", "wtf is this"] {
        let report = classifier.classify(text).unwrap();
        assert_eq!(report.overall_sentiment, SentimentLabel::Negative, "{text}");
        assert!(report.polarity < -0.4, "{text}: {}", report.polarity);
    }

    let report = classifier
        .classify("I was thrilled with the garbage service.")
        .unwrap();
    assert_ne!(report.overall_sentiment, SentimentLabel::Neutral);
    assert_ne!(report.polarity, 0.0);
}

#[test]
fn test_empty_text_is_rejected() {
    let classifier = default_classifier();
    assert!(matches!(classifier.classify(""), Err(Error::EmptyText)));
    assert!(matches!(classifier.classify(" \n\t"), Err(Error::EmptyText)));
}

#[test]
fn test_opposing_sentences_override_whole_text_label() {
    let report = default_classifier()
        .classify("I loved the movie. I hated the ending.")
        .unwrap();

    // The whole text leans slightly negative, the sentences disagree.
    assert_close(report.polarity, -0.0772);
    assert_eq!(report.overall_sentiment, SentimentLabel::Mixed);
    assert!(report.has_mixed_sentiment);

    let sentences: Vec<_> = report
        .sentence_analysis
        .iter()
        .map(|s| (s.text.as_str(), s.sentiment))
        .collect();
    assert_eq!(
        sentences,
        vec![
            ("I loved the movie.", SentimentLabel::Positive),
            ("I hated the ending.", SentimentLabel::Negative),
        ]
    );
    assert_close(report.sentence_analysis[0].polarity, 0.5994);
    assert_close(report.sentence_analysis[1].polarity, -0.6369);
}

#[test]
fn test_strong_text_with_marker_keeps_polarity() {
    let report = default_classifier()
        .classify("I love it and I am so happy, although it was long.")
        .unwrap();

    assert!(report.polarity >= 0.5);
    assert_eq!(report.overall_sentiment, SentimentLabel::Positive);
    // The marker still flags the text as mixed.
    assert!(report.has_mixed_sentiment);
}

#[test]
fn test_marker_inside_word_does_not_count() {
    let report = default_classifier()
        .classify("I love butter.")
        .unwrap();
    assert!(!report.has_mixed_sentiment);
}

#[test]
fn test_multi_word_marker_with_trailing_comma() {
    let classifier = SentimentClassifier::new(FixedScorer);
    let report = classifier
        .classify("It was fine. On the other hand, it was late.")
        .unwrap();
    assert!(report.has_mixed_sentiment);
    assert_eq!(report.sentiment_counts.mixed, 1);
}

#[test]
fn test_counts_match_sentence_labels() {
    let classifier = SentimentClassifier::new(FixedScorer);
    let report = classifier
        .classify("Good start. Bad middle. Nothing at the end. Good and bad, but fine.")
        .unwrap();

    assert_eq!(report.sentiment_counts.total(), report.sentence_analysis.len());
    assert_eq!(
        report.sentiment_counts,
        SentimentCounts {
            positive: 1,
            negative: 1,
            neutral: 1,
            mixed: 1,
        }
    );
    assert_eq!(report.overall_sentiment, SentimentLabel::Mixed);
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = default_classifier();
    let texts = [
        "I love this product.",
        "The meeting is at 3pm.",
        "I loved the movie. I hated the ending.",
    ];
    let expected: Vec<_> = texts
        .iter()
        .map(|t| classifier.classify(t).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|t| scope.spawn(|| classifier.classify(t).unwrap()))
            .collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), want);
        }
    });
}
