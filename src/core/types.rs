//! Value objects produced by a single analysis call.
//!
//! Nothing here outlives the call that created it: the scorer builds a fresh
//! [`PolarityScore`] for every string it sees, the classifier assembles the
//! [`AnalysisReport`] from those and hands it to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete sentiment assigned to a whole text or a single sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

impl SentimentLabel {
    /// Every label, in the order counts are reported.
    pub const ALL: [SentimentLabel; 4] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Mixed,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a polarity scorer for one string.
///
/// `pos`, `neg` and `neu` are non-negative and sum to 1; `compound` is the
/// normalized overall polarity in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarityScore {
    pub compound: f64,
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
}

impl PolarityScore {
    /// Score for text that carries no sentiment-bearing tokens at all.
    pub const NEUTRAL: PolarityScore = PolarityScore {
        compound: 0.0,
        pos: 0.0,
        neg: 0.0,
        neu: 1.0,
    };

    /// Sum of the three intensity fractions. Always within 1e-6 of 1.0.
    pub fn fraction_sum(&self) -> f64 {
        self.pos + self.neg + self.neu
    }
}

impl Default for PolarityScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Classification of one sentence, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    /// Compound score of the sentence.
    pub polarity: f64,
}

/// Number of sentences that received each label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mixed: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Mixed => self.mixed += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Mixed => self.mixed,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral + self.mixed
    }

    /// True when at least one sentence leaned each way.
    pub fn has_opposing_polarities(&self) -> bool {
        self.positive > 0 && self.negative > 0
    }
}

impl FromIterator<SentimentLabel> for SentimentCounts {
    fn from_iter<I: IntoIterator<Item = SentimentLabel>>(iter: I) -> Self {
        let mut counts = Self::default();
        for label in iter {
            counts.record(label);
        }
        counts
    }
}

/// Top-level result of classifying a text.
///
/// `polarity` is always the compound score of the whole text, even when
/// `overall_sentiment` has been overridden to [`SentimentLabel::Mixed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub overall_sentiment: SentimentLabel,
    pub polarity: f64,
    pub has_mixed_sentiment: bool,
    pub sentence_analysis: Vec<SentenceResult>,
    pub sentiment_counts: SentimentCounts,
}
