//! Tokens that end in a period without ending a sentence.

use std::collections::HashSet;

/// Titles and honorifics. These always precede a name, so the period after
/// them never ends a sentence.
pub const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "sr", "jr", "st", "sgt", "capt", "col",
    "gen", "lt", "gov", "sen", "rep", "pres",
];

/// Common English abbreviations, lowercase and without the trailing period.
/// Unlike titles these can close a sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    // organisations
    "inc", "ltd", "co", "corp", "llc", "dept", "univ", "assn", "bros",
    // latin and reference
    "etc", "vs", "viz", "cf", "al", "approx", "ca", "fig", "figs", "vol",
    "vols", "pp", "ed", "eds", "est", "misc", "ref",
    // calendar
    "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "mon", "tue", "tues", "thu", "thur", "thurs", "fri",
    // addresses and units
    "ave", "blvd", "rd", "mt", "ft", "hr", "hrs", "min", "mins", "sec", "oz", "lb", "lbs",
];

/// Capitalised words that open a new sentence after an abbreviation that
/// closed the previous one ("... in the U.S. It was ...").
pub const SENTENCE_STARTERS: &[&str] = &[
    "I", "It", "He", "She", "We", "They", "You", "The", "This", "That", "These", "Those",
    "There", "Then", "My", "Our", "His", "Her", "Their", "Its", "A", "An", "But", "And", "So",
];

#[derive(Debug, Clone)]
pub struct AbbreviationChecker {
    titles: HashSet<String>,
    known: HashSet<String>,
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new(DEFAULT_ABBREVIATIONS.iter().copied())
    }
}

impl AbbreviationChecker {
    /// Checker for `abbreviations` plus the built-in titles.
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            titles: normalize(TITLES.iter().copied()).collect(),
            known: normalize(abbreviations).collect(),
        }
    }

    pub fn extend<I, S>(&mut self, abbreviations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.known.extend(normalize(abbreviations));
    }

    /// Titles and single-letter initials: the period after them is never a
    /// sentence boundary. The pronoun `I` is not an initial.
    pub fn is_title_or_initial(&self, word: &str) -> bool {
        if self.titles.contains(&word.to_lowercase()) {
            return true;
        }
        let mut chars = word.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic() && c != 'I')
    }

    /// Whether `word` (the text right before a period) is an abbreviation.
    ///
    /// Besides the known list and titles this accepts dotted forms such as
    /// `e.g` or `U.S` and single-letter initials.
    pub fn is_abbreviation(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.is_title_or_initial(word) || self.known.contains(&word.to_lowercase()) {
            return true;
        }
        word.contains('.') && word.chars().any(char::is_alphabetic)
    }
}

/// Whether `word` conventionally opens a sentence.
pub fn is_sentence_starter(word: &str) -> bool {
    SENTENCE_STARTERS.contains(&word)
}

fn normalize<I, S>(abbreviations: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    abbreviations
        .into_iter()
        .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
        .filter(|a| !a.is_empty())
}
