//! Sentence-level sentiment classification with mixed-sentiment detection.
//!
//! A rule-based polarity scorer labels the whole text and each of its
//! sentences as positive, negative, neutral or mixed. Contrast markers such
//! as "but" or "on the other hand" and sentences leaning opposite ways mark
//! the text as mixed.
//!
//! ```ignore
//! use sentimap::config::SentimapConfig;
//!
//! sentimap::engine::initialize(&SentimapConfig::default())?;
//! let report = sentimap::classify("I loved the movie. I hated the ending.")?;
//! assert_eq!(report.overall_sentiment, sentimap::SentimentLabel::Mixed);
//! ```

pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod formatting;
pub mod io;
pub mod lexicon;
pub mod observability;
pub mod scoring;
pub mod segmentation;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, Error, PolarityScore, Result, SentenceResult, SentimentCounts,
    SentimentLabel,
};

pub use crate::boundary::{handle_request, Response};
pub use crate::classifier::{LabelThresholds, MixedIndicators, SentimentClassifier};
pub use crate::config::SentimapConfig;
pub use crate::engine::SentimentEngine;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::lexicon::Lexicon;
pub use crate::scoring::{PolarityScorer, VaderScorer};
pub use crate::segmentation::{split_sentences, SentenceSplitter};

/// Classify `text` with the global engine.
///
/// Returns [`Error::NotReady`] until [`engine::initialize`] has run, and
/// [`Error::Internal`] if the classifier faults.
pub fn classify(text: &str) -> Result<AnalysisReport> {
    let engine = engine::engine()?;
    boundary::analyze_text(engine.classifier(), Some(text))
}
