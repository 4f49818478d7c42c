use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::thresholds::ThresholdsConfig;
use crate::classifier::{LabelThresholds, MixedIndicators};
use crate::io::output::OutputFormat;

/// Root configuration structure for sentimap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SentimapConfig {
    /// Label thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,

    /// Contrast marker configuration
    #[serde(default)]
    pub indicators: Option<IndicatorsConfig>,

    /// Lexicon overlays
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IndicatorsConfig {
    /// Markers added to (or replacing) the built-in list
    #[serde(default)]
    pub extra: Vec<String>,

    /// Use only `extra`, dropping the built-in markers
    #[serde(default)]
    pub replace_defaults: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LexiconConfig {
    /// Lexicon file merged over the embedded one
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Inline token -> valence overrides, applied last
    #[serde(default)]
    pub entries: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl SentimapConfig {
    pub fn label_thresholds(&self) -> LabelThresholds {
        self.thresholds
            .map(|t| t.to_label_thresholds())
            .unwrap_or_default()
    }

    pub fn mixed_indicators(&self) -> MixedIndicators {
        match &self.indicators {
            Some(cfg) if cfg.replace_defaults => MixedIndicators::new(&cfg.extra),
            Some(cfg) => MixedIndicators::with_extra(&cfg.extra),
            None => MixedIndicators::default(),
        }
    }

    pub fn lexicon_path(&self) -> Option<&Path> {
        self.lexicon.as_ref().and_then(|l| l.path.as_deref())
    }

    pub fn lexicon_entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.lexicon
            .iter()
            .flat_map(|l| l.entries.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    pub fn default_output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }

    /// Make relative paths relative to `base` (the config file's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        if let Some(path) = self.lexicon.as_mut().and_then(|l| l.path.as_mut()) {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
