use crate::error::{Result, SearchError};
use std::collections::BTreeSet;

/// Split text on single spaces. Consecutive spaces produce empty terms; callers drop them.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ')
}

/// A term is valid when it carries no control characters (U+0000..=U+001F).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}

/// Terms excluded from indexing and from query matching. Fixed once built.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in words {
            let word = word.as_ref();
            if !is_valid_word(word) {
                return Err(SearchError::InvalidTerm(word.to_string()));
            }
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }
        Ok(Self { words: set })
    }

    /// Build from a single space-separated string, e.g. `"and in the"`.
    pub fn from_text(text: &str) -> Result<Self> { Self::new(split_into_words(text)) }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

/// Tokenize document text: drop empty terms and stop words, reject control characters.
///
/// Validation covers every token, stop words included, and completes before the caller
/// touches any index state.
pub fn split_into_words_no_stop<'a>(text: &'a str, stop_words: &StopWords) -> Result<Vec<&'a str>> {
    let mut words = Vec::new();
    for word in split_into_words(text) {
        if !is_valid_word(word) {
            return Err(SearchError::InvalidTerm(word.to_string()));
        }
        if word.is_empty() || stop_words.contains(word) { continue; }
        words.push(word);
    }
    Ok(words)
}
