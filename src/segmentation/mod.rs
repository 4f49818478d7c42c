//! Sentence segmentation.
//!
//! Candidate boundaries come from the Unicode sentence-boundary rules
//! (UAX #29), which already keep decimals such as `3.50`, lowercase
//! continuations and runs like `?!` or `...` together, and attach closing
//! quotes and brackets to the sentence they close. A merge pass then joins
//! candidates the Unicode rules split too eagerly:
//!
//! - pieces that do not end in terminal punctuation (line breaks);
//! - a period after a title or an initial (`Dr. Smith`, `J. R. R. Tolkien`);
//! - `No.` before a number;
//! - a period after any other abbreviation, unless the next word is a
//!   common sentence opener (`... in the U.S. It was ...`).
//!
//! Boundaries depend only on the text around each candidate, so splitting
//! the space-joined output again yields the same sentences.

pub mod abbreviations;

use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

pub use abbreviations::{
    is_sentence_starter, AbbreviationChecker, DEFAULT_ABBREVIATIONS, SENTENCE_STARTERS, TITLES,
};

static DEFAULT_SPLITTER: Lazy<SentenceSplitter> = Lazy::new(SentenceSplitter::default);

/// Split `text` with the default abbreviation list.
pub fn split_sentences(text: &str) -> Vec<&str> {
    DEFAULT_SPLITTER.split(text)
}

#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter {
    abbreviations: AbbreviationChecker,
}

impl SentenceSplitter {
    pub fn new(abbreviations: AbbreviationChecker) -> Self {
        Self { abbreviations }
    }

    /// Sentences in reading order, trimmed, never empty.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, segment) in text.split_sentence_bound_indices() {
            let start = *pending.get_or_insert(offset);
            let end = offset + segment.len();
            let rest = &text[end..];
            if rest.is_empty() || self.ends_sentence(&text[start..end], rest) {
                push_trimmed(&mut sentences, &text[start..end]);
                pending = None;
            }
        }

        if let Some(start) = pending {
            push_trimmed(&mut sentences, &text[start..]);
        }
        sentences
    }

    /// Whether the Unicode candidate `candidate` really ends a sentence,
    /// given the `rest` of the text after it.
    fn ends_sentence(&self, candidate: &str, rest: &str) -> bool {
        let body = candidate.trim_end().trim_end_matches(is_closing);
        let Some(last) = body.chars().last() else {
            return false;
        };
        if !is_terminal(last) {
            return false;
        }
        if last != '.' || body.ends_with("..") {
            return true;
        }

        let word = preceding_word(body, body.len() - 1);
        let next = next_word(rest);
        if self.abbreviations.is_title_or_initial(word) {
            return false;
        }
        // "No. 5"
        if word.eq_ignore_ascii_case("no") && next.starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }
        if self.abbreviations.is_abbreviation(word) {
            return is_sentence_starter(next);
        }
        true
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closing(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// The word ending right before byte offset `end`, without opening quotes
/// or brackets.
fn preceding_word(text: &str, end: usize) -> &str {
    text[..end]
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| matches!(c, '(' | '[' | '"' | '\'' | '“' | '‘' | '«'))
}

/// The first word of `rest`, without surrounding quotes, brackets or
/// punctuation.
fn next_word(rest: &str) -> &str {
    rest.split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric())
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
