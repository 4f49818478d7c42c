//! Valence lexicon used by the rule-based polarity scorer.
//!
//! The lexicon maps lowercase tokens (words and emoticons) to a mean valence
//! on VADER's `-4.0..=4.0` scale. A default lexicon is compiled into the
//! binary; deployments can overlay their own file in the same tab-separated
//! layout (`token<TAB>mean[<TAB>...]`) or inline entries from configuration.
//!
//! The lexicon is loaded once, during engine initialization, and is read-only
//! afterwards.

pub mod modifiers;

use crate::core::errors::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

pub use modifiers::{
    booster_weight, is_negation, BOOSTER_DECR, BOOSTER_INCR, CAPS_INCR, NEGATION_SCALAR,
};

const EMBEDDED_LEXICON: &str = include_str!("data/vader_lexicon.txt");

/// Largest magnitude a lexicon valence may carry.
pub const MAX_VALENCE: f64 = 4.0;

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lexicon compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Load a lexicon file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileSystem {
            message: format!("Failed to read lexicon {}", path.display()),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;
        let lexicon = Self::parse(&contents)?;
        log::debug!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Parse tab-separated lexicon text. Blank lines and `#` comments are
    /// skipped; the first malformed line aborts the parse.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut lexicon = Self::new();
        for (index, line) in contents.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim_end_matches('\r');
            if trimmed.trim().is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (token, valence) =
                parse_line(trimmed).map_err(|msg| Error::lexicon(line_no, msg))?;
            lexicon
                .insert(token, valence)
                .map_err(|msg| Error::lexicon(line_no, msg))?;
        }
        Ok(lexicon)
    }

    /// Add or replace one entry. Tokens are stored lowercase.
    pub fn insert(&mut self, token: &str, valence: f64) -> std::result::Result<(), String> {
        let token = token.trim();
        if token.is_empty() {
            return Err("empty token".to_string());
        }
        if !valence.is_finite() || valence.abs() > MAX_VALENCE {
            return Err(format!(
                "valence {} for '{}' outside -{MAX_VALENCE}..={MAX_VALENCE}",
                valence, token
            ));
        }
        self.valences.insert(token.to_lowercase(), valence);
        Ok(())
    }

    /// Overlay `other` on top of this lexicon; its entries win.
    pub fn merge(&mut self, other: Lexicon) {
        self.valences.extend(other.valences);
    }

    /// Valence of an already-lowercased token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

fn parse_line(line: &str) -> std::result::Result<(&str, f64), String> {
    let mut fields = line.split('\t');
    let token = fields
        .next()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| "missing token".to_string())?;
    let raw = fields
        .next()
        .ok_or_else(|| format!("missing valence for '{}'", token))?;
    let valence = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid valence '{}' for '{}': {}", raw.trim(), token, e))?;
    Ok((token, valence))
}
