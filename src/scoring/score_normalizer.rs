//! Turning per-token valences into the four reported intensities.

use crate::core::types::PolarityScore;

/// Normalization constant approximating the maximum expected raw sum.
pub const NORMALIZATION_ALPHA: f64 = 15.0;

const EXCLAMATION_WEIGHT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_WEIGHT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Map an unbounded valence sum into `[-1, 1]`.
pub fn normalize_compound(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

/// Extra emphasis contributed by `!` and `?` runs in the raw text.
pub fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_WEIGHT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_WEIGHT + question_emphasis
}

/// Sums of positive and negative valences (each shifted one unit away from
/// zero) and the count of neutral tokens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SiftedValences {
    pub positive: f64,
    pub negative: f64,
    pub neutral: usize,
}

pub fn sift(valences: &[f64]) -> SiftedValences {
    valences
        .iter()
        .fold(SiftedValences::default(), |mut acc, &v| {
            if v > 0.0 {
                acc.positive += v + 1.0;
            } else if v < 0.0 {
                acc.negative += v - 1.0;
            } else {
                acc.neutral += 1;
            }
            acc
        })
}

/// Build the final score from adjusted token valences and the source text.
pub fn score_valences(valences: &[f64], text: &str) -> PolarityScore {
    if valences.is_empty() {
        return PolarityScore::NEUTRAL;
    }

    let emphasis = punctuation_emphasis(text);
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = round_to(normalize_compound(sum), 4);

    let mut sifted = sift(valences);
    if sifted.positive > sifted.negative.abs() {
        sifted.positive += emphasis;
    } else if sifted.positive < sifted.negative.abs() {
        sifted.negative -= emphasis;
    }

    let total = sifted.positive + sifted.negative.abs() + sifted.neutral as f64;
    if total <= 0.0 {
        return PolarityScore::NEUTRAL;
    }

    PolarityScore {
        compound,
        pos: (sifted.positive / total).abs(),
        neg: (sifted.negative / total).abs(),
        neu: (sifted.neutral as f64 / total).abs(),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_odd_and_bounded() {
        assert_eq!(normalize_compound(0.0), 0.0);
        assert!((normalize_compound(2.0) + normalize_compound(-2.0)).abs() < 1e-12);
        assert!(normalize_compound(1e9) <= 1.0);
        assert!(normalize_compound(-1e9) >= -1.0);
    }

    #[test]
    fn test_punctuation_emphasis_caps_exclamations() {
        assert_eq!(punctuation_emphasis("no emphasis"), 0.0);
        let four = punctuation_emphasis("!!!!");
        assert!((punctuation_emphasis("!!!!!!!!") - four).abs() < 1e-12);
        assert_eq!(punctuation_emphasis("really?"), 0.0);
        assert!((punctuation_emphasis("really??") - 0.36).abs() < 1e-12);
        assert_eq!(punctuation_emphasis("?????"), MAX_QUESTION_EMPHASIS);
    }

    #[test]
    fn test_sift_shifts_away_from_zero() {
        let sifted = sift(&[2.0, -1.0, 0.0, 0.0]);
        assert_eq!(sifted.positive, 3.0);
        assert_eq!(sifted.negative, -2.0);
        assert_eq!(sifted.neutral, 2);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let score = score_valences(&[3.2, 0.0, -1.1, 0.0], "Wow!!");
        assert!((score.fraction_sum() - 1.0).abs() < 1e-9);
        assert!(score.compound > 0.0);
    }

    #[test]
    fn test_empty_valences_are_neutral() {
        assert_eq!(score_valences(&[], "..."), PolarityScore::NEUTRAL);
    }
}
