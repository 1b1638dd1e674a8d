use crate::document::{compute_average_rating, Document, DocumentData, DocumentStatus};
use crate::error::{Result, SearchError};
use crate::index::{DocId, DocumentIds, InvertedIndex, TermFrequencies};
use crate::query::{parse_query, Query};
use crate::ranking::rank;
use crate::tokenizer::{split_into_words_no_stop, StopWords};
use std::collections::BTreeMap;

/// In-memory TF-IDF search engine.
///
/// Not synchronized: wrap it in a lock to share it between threads.
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWords,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Build an engine from a collection of stop words. Empty words are ignored.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self { stop_words: StopWords::new(stop_words)?, index: InvertedIndex::new() })
    }

    /// Build an engine from a space-separated stop word string.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Ok(Self { stop_words: StopWords::from_text(text)?, index: InvertedIndex::new() })
    }

    pub fn stop_words(&self) -> &StopWords { &self.stop_words }

    pub fn add_document(&mut self, id: DocId, text: &str, status: DocumentStatus, ratings: &[i32]) -> Result<()> {
        if self.index.contains(id) {
            return Err(SearchError::DuplicateDocumentId(id));
        }
        let words = split_into_words_no_stop(text, &self.stop_words)?;
        let data = DocumentData { rating: compute_average_rating(ratings), status };
        self.index.insert(id, &words, data);
        tracing::debug!(doc_id = id, terms = words.len(), rating = data.rating, %status, "document added");
        Ok(())
    }

    /// Top documents with status `Active`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Active)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, |_, doc_status, _| doc_status == status)
    }

    /// Top documents accepted by `predicate(id, status, rating)`, best first.
    pub fn find_top_documents_with<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = parse_query(raw_query, &self.stop_words)?;
        Ok(rank(self.find_all_documents(&query, predicate)))
    }

    fn find_all_documents<F>(&self, query: &Query, predicate: F) -> Vec<Document>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let (Some(plist), Some(idf)) = (self.index.postings(word), self.index.inverse_document_freq(word)) else {
                continue;
            };
            for (&doc_id, &tf) in plist {
                let Some(data) = self.index.document(doc_id) else { continue };
                if predicate(doc_id, data.status, data.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(plist) = self.index.postings(word) {
                for doc_id in plist.keys() {
                    relevance.remove(doc_id);
                }
            }
        }

        relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.index.document(id).map(|data| Document { id, relevance, rating: data.rating })
            })
            .collect()
    }

    /// Plus terms of `raw_query` found in document `id`, lexicographically ordered.
    /// Empty when any minus term is present in the document.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<String>, DocumentStatus)> {
        let query = parse_query(raw_query, &self.stop_words)?;
        let data = self.index.document(id).ok_or(SearchError::UnknownDocumentId(id))?;
        let in_doc = |word: &String| self.index.postings(word).is_some_and(|p| p.contains_key(&id));

        if query.minus_words.iter().any(in_doc) {
            return Ok((Vec::new(), data.status));
        }
        let matched = query.plus_words.iter().filter(|w| in_doc(*w)).cloned().collect();
        Ok((matched, data.status))
    }

    pub fn document_count(&self) -> usize { self.index.num_docs() }

    /// Term frequencies of document `id`; empty for unknown ids.
    pub fn word_frequencies(&self, id: DocId) -> &TermFrequencies { self.index.term_frequencies(id) }

    pub fn contains(&self, id: DocId) -> bool { self.index.contains(id) }

    /// Remove a document from every structure. Unknown ids are ignored.
    pub fn remove_document(&mut self, id: DocId) {
        if self.index.remove(id) {
            tracing::debug!(doc_id = id, "document removed");
        }
    }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> DocumentIds<'_> { self.index.doc_ids() }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter { self.document_ids() }
}
