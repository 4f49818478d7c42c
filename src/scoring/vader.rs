//! Lexicon and rule based polarity scorer in the style of VADER.

use super::score_normalizer::score_valences;
use super::tokens::ScoringText;
use super::PolarityScorer;
use crate::core::types::PolarityScore;
use crate::lexicon::{booster_weight, is_negation, Lexicon, CAPS_INCR, NEGATION_SCALAR};
use std::sync::Arc;

/// How far back booster and negation words reach.
const LOOKBACK: usize = 3;

/// Dampening applied to booster words by their distance from the scored word.
const DISTANCE_DAMPING: [f64; LOOKBACK] = [1.0, 0.95, 0.9];

/// Weight of valences before / after a contrastive "but".
const BEFORE_CONTRAST: f64 = 0.5;
const AFTER_CONTRAST: f64 = 1.5;

const NEVER_EMPHASIS: f64 = 1.25;

#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Arc<Lexicon>,
}

impl VaderScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn token_valences(&self, text: &ScoringText<'_>) -> Vec<f64> {
        let mut valences = Vec::with_capacity(text.len());
        for i in 0..text.len() {
            let token = text.lower(i);
            let is_kind_of = token == "kind" && text.get_lower(i + 1) == Some("of");
            if booster_weight(token).is_some() || is_kind_of {
                valences.push(0.0);
                continue;
            }
            valences.push(self.valence_at(text, i));
        }
        apply_contrast_shift(text, &mut valences);
        valences
    }

    fn valence_at(&self, text: &ScoringText<'_>, i: usize) -> f64 {
        let token = text.lower(i);
        let Some(base) = self.lexicon.valence(token) else {
            return 0.0;
        };

        let mut valence = base;

        // "no" directly before another sentiment word acts as a negator
        if token == "no" && text.get_lower(i + 1).is_some_and(|n| self.lexicon.contains(n)) {
            valence = 0.0;
        }
        if preceded_by_no(text, i) {
            valence = base * NEGATION_SCALAR;
        }

        if text.is_shouting(i) {
            if valence > 0.0 {
                valence += CAPS_INCR;
            } else {
                valence -= CAPS_INCR;
            }
        }

        for distance in 1..=LOOKBACK.min(i) {
            let prior = i - distance;
            if self.lexicon.contains(text.lower(prior)) {
                continue;
            }
            let boost = booster_scalar(text, prior, valence);
            valence += boost * DISTANCE_DAMPING[distance - 1];
            valence = negation_check(text, i, distance, valence);
        }

        least_check(&self.lexicon, text, i, valence)
    }
}

impl PolarityScorer for VaderScorer {
    fn score(&self, text: &str) -> PolarityScore {
        let tokens = ScoringText::new(text);
        if tokens.is_empty() {
            return PolarityScore::NEUTRAL;
        }
        let valences = self.token_valences(&tokens);
        score_valences(&valences, text)
    }
}

fn preceded_by_no(text: &ScoringText<'_>, i: usize) -> bool {
    (i > 0 && text.lower(i - 1) == "no")
        || (i > 1 && text.lower(i - 2) == "no")
        || (i > 2 && text.lower(i - 3) == "no" && matches!(text.lower(i - 1), "or" | "nor"))
}

/// Contribution of the booster at `index` to a word of the given valence.
fn booster_scalar(text: &ScoringText<'_>, index: usize, valence: f64) -> f64 {
    let Some(weight) = booster_weight(text.lower(index)) else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -weight } else { weight };
    if text.is_shouting(index) {
        if valence > 0.0 {
            scalar += CAPS_INCR;
        } else {
            scalar -= CAPS_INCR;
        }
    }
    scalar
}

fn negation_check(text: &ScoringText<'_>, i: usize, distance: usize, valence: f64) -> f64 {
    let prior = text.lower(i - distance);
    let is_so_or_this = |w: &str| w == "so" || w == "this";

    match distance {
        1 if is_negation(prior) => valence * NEGATION_SCALAR,
        2 => {
            let between = text.lower(i - 1);
            if prior == "never" && is_so_or_this(between) {
                valence * NEVER_EMPHASIS
            } else if prior == "without" && between == "doubt" {
                valence
            } else if is_negation(prior) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        3 => {
            let (second, first) = (text.lower(i - 2), text.lower(i - 1));
            if prior == "never" && (is_so_or_this(second) || is_so_or_this(first)) {
                valence * NEVER_EMPHASIS
            } else if prior == "without" && (second == "doubt" || first == "doubt") {
                valence
            } else if is_negation(prior) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least X" flips X, except in "at least" and "very least".
fn least_check(lexicon: &Lexicon, text: &ScoringText<'_>, i: usize, valence: f64) -> f64 {
    if i == 0 {
        return valence;
    }
    let prev = text.lower(i - 1);
    if prev != "least" || lexicon.contains(prev) {
        return valence;
    }
    if i > 1 && matches!(text.lower(i - 2), "at" | "very") {
        valence
    } else {
        valence * NEGATION_SCALAR
    }
}

/// Sentiment after "but" dominates what came before it.
fn apply_contrast_shift(text: &ScoringText<'_>, valences: &mut [f64]) {
    let Some(pivot) = text.position("but") else {
        return;
    };
    for (index, valence) in valences.iter_mut().enumerate() {
        if index < pivot {
            *valence *= BEFORE_CONTRAST;
        } else if index > pivot {
            *valence *= AFTER_CONTRAST;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> VaderScorer {
        VaderScorer::new(Arc::new(Lexicon::embedded().unwrap()))
    }

    #[test]
    fn test_simple_positive() {
        let score = scorer().score("I love this product.");
        assert!((score.compound - 0.6369).abs() < 1e-4);
        assert!(score.pos > score.neg);
    }

    #[test]
    fn test_no_lexicon_words_is_neutral() {
        let score = scorer().score("The meeting is at 3pm.");
        assert_eq!(score.compound, 0.0);
        assert_eq!(score.neu, 1.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let s = scorer();
        assert!(s.score("The movie was good").compound > 0.0);
        assert!(s.score("The movie was not good").compound < 0.0);
        assert!(s.score("The movie wasn't good").compound < 0.0);
    }

    #[test]
    fn test_boosters_change_intensity() {
        let s = scorer();
        let plain = s.score("The movie was good").compound;
        let boosted = s.score("The movie was very good").compound;
        let dampened = s.score("The movie was slightly good").compound;
        assert!(boosted > plain);
        assert!(dampened < plain);
    }

    #[test]
    fn test_caps_emphasis_in_mixed_case() {
        let s = scorer();
        assert!(s.score("The movie was GOOD").compound > s.score("The movie was good").compound);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let s = scorer();
        assert!(s.score("The movie was good!!!").compound > s.score("The movie was good").compound);
    }

    #[test]
    fn test_contrast_shift_weights_second_clause() {
        let score = scorer().score("The food was great, but the service was terrible.");
        // great 3.1 * 0.5 + terrible -2.1 * 1.5 = -1.6
        assert!((score.compound - (-0.3818)).abs() < 1e-4);
    }

    #[test]
    fn test_at_least_is_not_negation() {
        let s = scorer();
        assert!(s.score("at least fun").compound > 0.0);
        assert!(s.score("the least fun evening").compound < 0.0);
    }

    #[test]
    fn test_never_so_amplifies() {
        let s = scorer();
        let never_so = s.score("never so happy").compound;
        assert!(never_so > 0.0);
    }

    #[test]
    fn test_empty_and_punctuation_are_neutral() {
        let s = scorer();
        assert_eq!(s.score(""), PolarityScore::NEUTRAL);
        assert_eq!(s.score("   "), PolarityScore::NEUTRAL);
        let punct = s.score("?!");
        assert_eq!(punct.compound, 0.0);
        assert!((punct.fraction_sum() - 1.0).abs() < 1e-9);
    }
}
