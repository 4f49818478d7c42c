//! Process-wide sentiment engine.
//!
//! The lexicon is loaded and the classifier built exactly once. Until
//! [`initialize`] succeeds every caller gets [`Error::NotReady`].

use once_cell::sync::OnceCell;
use std::sync::Arc;

use crate::classifier::SentimentClassifier;
use crate::config::SentimapConfig;
use crate::core::{AnalysisReport, Error, PolarityScore, Result};
use crate::lexicon::Lexicon;
use crate::scoring::{PolarityScorer, VaderScorer};

static ENGINE: OnceCell<SentimentEngine> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct SentimentEngine {
    classifier: SentimentClassifier<VaderScorer>,
}

impl SentimentEngine {
    /// Build an engine: embedded lexicon, then the configured lexicon file,
    /// then inline entries.
    pub fn from_config(config: &SentimapConfig) -> Result<Self> {
        let lexicon = build_lexicon(config)?;
        let thresholds = config.label_thresholds();
        thresholds.validate().map_err(Error::configuration)?;

        let classifier = SentimentClassifier::new(VaderScorer::new(Arc::new(lexicon)))
            .with_indicators(config.mixed_indicators())
            .with_thresholds(thresholds);

        Ok(Self { classifier })
    }

    pub fn classifier(&self) -> &SentimentClassifier<VaderScorer> {
        &self.classifier
    }

    pub fn classify(&self, text: &str) -> Result<AnalysisReport> {
        self.classifier.classify(text)
    }

    pub fn score(&self, text: &str) -> PolarityScore {
        self.classifier.scorer().score(text)
    }

    pub fn lexicon_size(&self) -> usize {
        self.classifier.scorer().lexicon().len()
    }
}

fn build_lexicon(config: &SentimapConfig) -> Result<Lexicon> {
    let mut lexicon = Lexicon::embedded()?;

    if let Some(path) = config.lexicon_path() {
        let overlay = Lexicon::from_path(path)?;
        log::debug!(
            "Merging {} lexicon entries from {}",
            overlay.len(),
            path.display()
        );
        lexicon.merge(overlay);
    }

    for (token, valence) in config.lexicon_entries() {
        lexicon
            .insert(token, valence)
            .map_err(|e| Error::configuration(format!("lexicon entry '{}': {}", token, e)))?;
    }

    Ok(lexicon)
}

/// Build the global engine. Later calls return the engine built first.
pub fn initialize(config: &SentimapConfig) -> Result<&'static SentimentEngine> {
    ENGINE.get_or_try_init(|| {
        let engine = SentimentEngine::from_config(config)?;
        log::info!(
            "Sentiment engine ready ({} lexicon entries, {} mixed indicators)",
            engine.lexicon_size(),
            engine.classifier().indicators().len()
        );
        Ok(engine)
    })
}

pub fn engine() -> Result<&'static SentimentEngine> {
    ENGINE.get().ok_or(Error::NotReady)
}

pub fn is_ready() -> bool {
    ENGINE.get().is_some()
}
