//! Token view of a text as the polarity rules see it.

/// Whitespace-split tokens with surrounding punctuation removed, plus the
/// casing facts the emphasis rules need.
#[derive(Debug, Clone)]
pub struct ScoringText<'a> {
    tokens: Vec<Token<'a>>,
    caps_differential: bool,
}

#[derive(Debug, Clone)]
struct Token<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> ScoringText<'a> {
    pub fn new(text: &'a str) -> Self {
        let tokens: Vec<Token<'a>> = text
            .split_whitespace()
            .map(strip_punctuation)
            .filter(|t| t.chars().count() > 1)
            .map(|raw| Token {
                raw,
                lower: raw.to_lowercase(),
            })
            .collect();

        let shouting = tokens.iter().filter(|t| is_all_caps(t.raw)).count();
        let caps_differential = shouting > 0 && shouting < tokens.len();

        Self {
            tokens,
            caps_differential,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lowercase form of token `index`.
    pub fn lower(&self, index: usize) -> &str {
        &self.tokens[index].lower
    }

    /// Lowercase form of token `index`, if it exists.
    pub fn get_lower(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.lower.as_str())
    }

    /// Token written in ALL CAPS while the rest of the text is not.
    pub fn is_shouting(&self, index: usize) -> bool {
        self.caps_differential && is_all_caps(self.tokens[index].raw)
    }

    /// Index of the first token equal to `word` (lowercase).
    pub fn position(&self, word: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.lower == word)
    }
}

/// Strip leading and trailing punctuation unless that would leave fewer than
/// two characters; short punctuation runs are usually emoticons.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 1 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(token: &str) -> bool {
    let mut cased = false;
    for c in token.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_single_chars() {
        let text = ScoringText::new("I love this product.");
        assert_eq!(text.len(), 3);
        assert_eq!(text.lower(0), "love");
        assert_eq!(text.lower(2), "product");
    }

    #[test]
    fn test_keeps_emoticons() {
        let text = ScoringText::new("great :) :D <3");
        assert_eq!(text.get_lower(1), Some(":)"));
        assert_eq!(text.get_lower(2), Some(":d"));
        assert_eq!(text.get_lower(3), Some("<3"));
    }

    #[test]
    fn test_caps_differential() {
        let text = ScoringText::new("this is GREAT");
        assert!(text.is_shouting(2));
        assert!(!text.is_shouting(0));

        let all_caps = ScoringText::new("THIS IS GREAT");
        assert!(!all_caps.is_shouting(2));
    }

    #[test]
    fn test_punctuation_only_survives_as_token() {
        let text = ScoringText::new("!!! ...");
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(ScoringText::new(" \t\n ").is_empty());
    }
}
