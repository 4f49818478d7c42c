// Shared helpers for sentimap integration tests
#![allow(dead_code)]

use sentimap::{PolarityScore, PolarityScorer, SentimentClassifier};

/// Scorer with canned answers: "good" scores +0.6, "bad" -0.6, both cancel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScorer;

impl PolarityScorer for FixedScorer {
    fn score(&self, text: &str) -> PolarityScore {
        let lower = text.to_lowercase();
        let mut compound = 0.0;
        if lower.contains("good") {
            compound += 0.6;
        }
        if lower.contains("bad") {
            compound -= 0.6;
        }
        polarity(compound)
    }
}

/// Scorer that panics on any text containing "boom".
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingScorer;

impl PolarityScorer for PanickingScorer {
    fn score(&self, text: &str) -> PolarityScore {
        if text.contains("boom") {
            panic!("scorer exploded on purpose");
        }
        PolarityScore::NEUTRAL
    }
}

pub fn polarity(compound: f64) -> PolarityScore {
    if compound > 0.0 {
        PolarityScore {
            compound,
            pos: 0.5,
            neg: 0.0,
            neu: 0.5,
        }
    } else if compound < 0.0 {
        PolarityScore {
            compound,
            pos: 0.0,
            neg: 0.5,
            neu: 0.5,
        }
    } else {
        PolarityScore::NEUTRAL
    }
}

pub fn default_classifier() -> SentimentClassifier {
    SentimentClassifier::with_embedded_lexicon().expect("embedded lexicon parses")
}
