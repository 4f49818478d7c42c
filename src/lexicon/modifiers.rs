//! Words that modify the valence of their neighbours instead of carrying
//! their own: intensity boosters/dampeners and negations.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Added to a valence by an intensifying booster word.
pub const BOOSTER_INCR: f64 = 0.293;
/// Added to a valence by a dampening booster word.
pub const BOOSTER_DECR: f64 = -0.293;
/// Emphasis for a word written in ALL CAPS inside mixed-case text.
pub const CAPS_INCR: f64 = 0.733;
/// Multiplier applied to a negated valence.
pub const NEGATION_SCALAR: f64 = -0.74;

const INTENSIFIERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerable", "considerably",
    "decidedly", "deeply", "enormous", "enormously", "entirely", "especially", "exceptional",
    "exceptionally", "extreme", "extremely", "fabulously", "fully", "greatly", "hella",
    "highly", "hugely", "incredible", "incredibly", "intensely", "major", "majorly", "more",
    "most", "particularly", "purely", "quite", "really", "remarkably", "so", "substantially",
    "thoroughly", "total", "totally", "tremendous", "tremendously", "uber", "unbelievably",
    "unusually", "utter", "utterly", "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "kindof", "kind-of", "less", "little", "marginal",
    "marginally", "occasional", "occasionally", "partly", "scarce", "scarcely", "slight",
    "slightly", "somewhat", "sorta", "sortof", "sort-of",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never",
    "none", "nope", "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
    "uhuh", "uh-uh", "wasnt", "werent", "without", "wont", "wouldnt", "rarely", "seldom",
    "despite",
];

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    INTENSIFIERS
        .iter()
        .map(|w| (*w, BOOSTER_INCR))
        .chain(DAMPENERS.iter().map(|w| (*w, BOOSTER_DECR)))
        .collect()
});

/// Booster weight of a lowercase token, if it is a booster.
pub fn booster_weight(token: &str) -> Option<f64> {
    BOOSTERS.get(token).copied()
}

/// Whether a lowercase token negates what follows. Any `n't` contraction
/// counts.
pub fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.contains("n't")
}
