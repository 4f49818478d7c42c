//! Polarity scoring: text in, four intensity fractions out.
//!
//! The classifier only depends on [`PolarityScorer`]; [`VaderScorer`] is the
//! default engine, but any scorer honouring the numeric contract can be
//! swapped in:
//!
//! - `pos`, `neg`, `neu` are non-negative and sum to 1 (within 1e-6)
//! - `compound` lies in `[-1, 1]`
//! - the result is a pure function of the input and the loaded lexicon
//! - every string is accepted, including empty and punctuation-only input

pub mod score_normalizer;
pub mod tokens;
pub mod vader;

use crate::core::types::PolarityScore;

pub use score_normalizer::{normalize_compound, punctuation_emphasis, score_valences};
pub use tokens::ScoringText;
pub use vader::VaderScorer;

/// A total, deterministic polarity engine.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> PolarityScore;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for &S {
    fn score(&self, text: &str) -> PolarityScore {
        (**self).score(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn score(&self, text: &str) -> PolarityScore {
        (**self).score(text)
    }
}
