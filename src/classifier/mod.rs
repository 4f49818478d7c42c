//! Sentiment classification.
//!
//! A text is labelled twice: once as a whole and once per sentence. Each
//! unit gets a base label from its compound score, which a contrast marker
//! can override to [`SentimentLabel::Mixed`] when the score is not strongly
//! polarized. The sentence labels are then tallied and reconciled with the
//! whole-text label:
//!
//! - the text has mixed sentiment when the whole text carries a marker, any
//!   sentence is mixed, or sentences lean both ways
//! - when sentences lean both ways the overall label becomes mixed, whatever
//!   the whole-text score said
//!
//! The reported polarity is always the whole-text compound score.

pub mod indicators;

use crate::core::errors::{Error, Result};
use crate::core::types::{
    AnalysisReport, PolarityScore, SentenceResult, SentimentCounts, SentimentLabel,
};
use crate::lexicon::Lexicon;
use crate::observability::{set_phase, set_sentence, AnalysisPhase};
use crate::scoring::{PolarityScorer, VaderScorer};
use crate::segmentation::SentenceSplitter;
use std::sync::Arc;

pub use indicators::{MixedIndicators, DEFAULT_INDICATORS};

pub const DEFAULT_NEUTRAL_BAND: f64 = 0.05;
pub const DEFAULT_MIXED_CEILING: f64 = 0.5;

/// Score cut-offs for labelling.
///
/// Compound scores within `neutral_band` of zero are neutral. A contrast
/// marker turns a unit mixed only while `|compound| < mixed_ceiling`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelThresholds {
    pub neutral_band: f64,
    pub mixed_ceiling: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            neutral_band: DEFAULT_NEUTRAL_BAND,
            mixed_ceiling: DEFAULT_MIXED_CEILING,
        }
    }
}

impl LabelThresholds {
    pub fn new(neutral_band: f64, mixed_ceiling: f64) -> std::result::Result<Self, String> {
        let thresholds = Self {
            neutral_band,
            mixed_ceiling,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(0.0..1.0).contains(&self.neutral_band) {
            return Err(format!(
                "neutral_band must be in [0, 1), got {}",
                self.neutral_band
            ));
        }
        if !(self.mixed_ceiling > self.neutral_band && self.mixed_ceiling <= 1.0) {
            return Err(format!(
                "mixed_ceiling must be in (neutral_band, 1], got {}",
                self.mixed_ceiling
            ));
        }
        Ok(())
    }
}

/// Base label from the compound score alone.
pub fn label_for_compound(compound: f64, thresholds: &LabelThresholds) -> SentimentLabel {
    if compound >= thresholds.neutral_band {
        SentimentLabel::Positive
    } else if compound <= -thresholds.neutral_band {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Replace `base` with mixed when a marker is present and the score sits
/// strictly inside `(-mixed_ceiling, mixed_ceiling)`.
pub fn apply_mixed_override(
    base: SentimentLabel,
    compound: f64,
    has_indicator: bool,
    thresholds: &LabelThresholds,
) -> SentimentLabel {
    if has_indicator && compound.abs() < thresholds.mixed_ceiling {
        SentimentLabel::Mixed
    } else {
        base
    }
}

pub fn has_mixed_sentiment(text_has_indicator: bool, counts: &SentimentCounts) -> bool {
    text_has_indicator || counts.mixed > 0 || counts.has_opposing_polarities()
}

/// Final whole-text label after reconciling with the sentence tally.
pub fn resolve_overall(
    whole_text: SentimentLabel,
    has_mixed: bool,
    counts: &SentimentCounts,
) -> SentimentLabel {
    if has_mixed && counts.has_opposing_polarities() {
        SentimentLabel::Mixed
    } else {
        whole_text
    }
}

/// Label of a single unit (whole text or one sentence).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitClassification {
    pub score: PolarityScore,
    pub label: SentimentLabel,
    pub has_mixed_indicator: bool,
}

/// Stateless classifier; safe to share across threads once built.
#[derive(Debug, Clone)]
pub struct SentimentClassifier<S = VaderScorer> {
    scorer: S,
    indicators: MixedIndicators,
    splitter: SentenceSplitter,
    thresholds: LabelThresholds,
}

impl SentimentClassifier<VaderScorer> {
    /// Classifier over the compiled-in lexicon with default settings.
    pub fn with_embedded_lexicon() -> Result<Self> {
        let lexicon = Lexicon::embedded()?;
        Ok(Self::new(VaderScorer::new(Arc::new(lexicon))))
    }
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            indicators: MixedIndicators::default(),
            splitter: SentenceSplitter::default(),
            thresholds: LabelThresholds::default(),
        }
    }

    pub fn with_indicators(mut self, indicators: MixedIndicators) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_thresholds(mut self, thresholds: LabelThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn indicators(&self) -> &MixedIndicators {
        &self.indicators
    }

    pub fn thresholds(&self) -> &LabelThresholds {
        &self.thresholds
    }

    pub fn classify_unit(&self, text: &str) -> UnitClassification {
        let score = {
            let _phase = set_phase(AnalysisPhase::Scoring);
            self.scorer.score(text)
        };
        let has_mixed_indicator = self.indicators.detect(text);
        let base = label_for_compound(score.compound, &self.thresholds);
        let label = apply_mixed_override(base, score.compound, has_mixed_indicator, &self.thresholds);

        UnitClassification {
            score,
            label,
            has_mixed_indicator,
        }
    }

    /// Classify `text` as a whole and sentence by sentence.
    ///
    /// Fails only with [`Error::EmptyText`] for empty or blank input.
    pub fn classify(&self, text: &str) -> Result<AnalysisReport> {
        if text.trim().is_empty() {
            return Err(Error::EmptyText);
        }

        let span = tracing::debug_span!("classify", chars = text.len());
        let _enter = span.enter();

        let overall = {
            let _phase = set_phase(AnalysisPhase::Classification);
            self.classify_unit(text)
        };

        let sentences = {
            let _phase = set_phase(AnalysisPhase::Segmentation);
            self.splitter.split(text)
        };

        let sentence_analysis: Vec<SentenceResult> = {
            let _phase = set_phase(AnalysisPhase::Classification);
            sentences
                .iter()
                .enumerate()
                .map(|(index, sentence)| {
                    let _sentence = set_sentence(index);
                    let unit = self.classify_unit(sentence);
                    SentenceResult {
                        text: (*sentence).to_string(),
                        sentiment: unit.label,
                        polarity: unit.score.compound,
                    }
                })
                .collect()
        };

        let _phase = set_phase(AnalysisPhase::Aggregation);
        let sentiment_counts: SentimentCounts =
            sentence_analysis.iter().map(|s| s.sentiment).collect();
        let has_mixed = has_mixed_sentiment(overall.has_mixed_indicator, &sentiment_counts);
        let overall_sentiment = resolve_overall(overall.label, has_mixed, &sentiment_counts);

        log::debug!(
            "Classified {} sentences: overall={} compound={:.4} mixed={}",
            sentence_analysis.len(),
            overall_sentiment,
            overall.score.compound,
            has_mixed
        );

        Ok(AnalysisReport {
            overall_sentiment,
            polarity: overall.score.compound,
            has_mixed_sentiment: has_mixed,
            sentence_analysis,
            sentiment_counts,
        })
    }
}
