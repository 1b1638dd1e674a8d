use crate::error::{Result, SearchError};
use crate::tokenizer::{is_valid_word, split_into_words, StopWords};
use std::collections::BTreeSet;

#[derive(Debug, PartialEq, Eq)]
struct QueryWord<'a> {
    data: &'a str,
    is_minus: bool,
    is_stop: bool,
}

/// Parsed query. Plus and minus sets are filled independently, a term may land in both.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

fn parse_query_word<'a>(text: &'a str, stop_words: &StopWords) -> Result<QueryWord<'a>> {
    let (data, is_minus) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text, false),
    };
    if is_minus && (data.is_empty() || data.starts_with('-')) {
        return Err(SearchError::MalformedQueryTerm(text.to_string()));
    }
    if !is_valid_word(data) {
        return Err(SearchError::InvalidTerm(text.to_string()));
    }
    Ok(QueryWord { data, is_minus, is_stop: stop_words.contains(data) })
}

/// Parse a raw query. Fails on the first bad token without returning a partial query.
pub(crate) fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query> {
    let mut query = Query::default();
    for word in split_into_words(text) {
        if word.is_empty() { continue; }
        let qw = parse_query_word(word, stop_words)?;
        if qw.is_stop { continue; }
        if qw.is_minus {
            query.minus_words.insert(qw.data.to_string());
        } else {
            query.plus_words.insert(qw.data.to_string());
        }
    }
    Ok(query)
}
