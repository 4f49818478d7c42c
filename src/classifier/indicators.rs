//! Contrast and concession markers that signal mixed sentiment.

/// Markers recognised out of the box.
pub const DEFAULT_INDICATORS: &[&str] = &[
    "but",
    "however",
    "although",
    "though",
    "nevertheless",
    "nonetheless",
    "yet",
    "still",
    "while",
    "despite",
    "in spite of",
    "on the other hand",
    "even though",
    "that said",
    "conversely",
];

/// Immutable set of single- and multi-word markers.
///
/// Matching runs over the text's normalized token sequence (lowercase,
/// surrounding punctuation removed). A multi-word marker matches a window of
/// consecutive tokens, so "on the other hand," is found while "butter" never
/// matches "but".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedIndicators {
    phrases: Vec<Vec<String>>,
}

impl Default for MixedIndicators {
    fn default() -> Self {
        Self::new(DEFAULT_INDICATORS.iter().copied())
    }
}

impl MixedIndicators {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases: Vec<Vec<String>> = Vec::new();
        for marker in markers {
            let tokens = normalize_tokens(marker.as_ref());
            if !tokens.is_empty() && !phrases.contains(&tokens) {
                phrases.push(tokens);
            }
        }
        Self { phrases }
    }

    /// Default markers plus `extra`.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let defaults = DEFAULT_INDICATORS.iter().map(|m| m.to_string());
        Self::new(defaults.chain(extra.into_iter().map(|m| m.as_ref().to_string())))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Markers as space-joined phrases.
    pub fn markers(&self) -> impl Iterator<Item = String> + '_ {
        self.phrases.iter().map(|p| p.join(" "))
    }

    /// Whether any marker occurs in `text`.
    pub fn detect(&self, text: &str) -> bool {
        let tokens = normalize_tokens(text);
        self.phrases.iter().any(|phrase| contains_window(&tokens, phrase))
    }

    /// Every marker found in `text`, in marker order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        let tokens = normalize_tokens(text);
        self.phrases
            .iter()
            .filter(|phrase| contains_window(&tokens, phrase))
            .map(|phrase| phrase.join(" "))
            .collect()
    }
}

fn contains_window(tokens: &[String], phrase: &[String]) -> bool {
    tokens.windows(phrase.len()).any(|window| window == phrase)
}

/// Lowercase whitespace tokens with surrounding punctuation removed.
fn normalize_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}
