use crate::document::DocumentData;
use std::collections::btree_map::{self, BTreeMap};
use std::iter::Copied;

pub type DocId = u32;

/// term -> frequency of that term inside one document
pub type TermFrequencies = BTreeMap<String, f64>;

/// doc id -> frequency of one term inside that document
pub type Postings = BTreeMap<DocId, f64>;

/// Live ids in ascending order.
pub type DocumentIds<'a> = Copied<btree_map::Keys<'a, DocId, TermFrequencies>>;

static EMPTY_FREQUENCIES: TermFrequencies = BTreeMap::new();

/// Inverted index plus document store.
///
/// `postings` and `doc_terms` are two views of the same data and are always
/// updated together. The key set of `doc_terms` and `docs` is the set of live ids.
#[derive(Debug, Default)]
pub(crate) struct InvertedIndex {
    postings: BTreeMap<String, Postings>,
    doc_terms: BTreeMap<DocId, TermFrequencies>,
    docs: BTreeMap<DocId, DocumentData>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn contains(&self, doc_id: DocId) -> bool { self.docs.contains_key(&doc_id) }

    pub fn num_docs(&self) -> usize { self.docs.len() }

    /// Insert a document whose words are already validated and stripped of stop words.
    /// The caller guarantees `doc_id` is not live.
    pub fn insert(&mut self, doc_id: DocId, words: &[&str], data: DocumentData) {
        let mut tf = TermFrequencies::new();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *tf.entry((*word).to_string()).or_insert(0.0) += inv_word_count;
            }
        }
        for (term, freq) in tf.iter() {
            self.postings.entry(term.clone()).or_default().insert(doc_id, *freq);
        }
        self.doc_terms.insert(doc_id, tf);
        self.docs.insert(doc_id, data);
    }

    /// Drop every trace of `doc_id`. Returns false if it was not live.
    pub fn remove(&mut self, doc_id: DocId) -> bool {
        let Some(tf) = self.doc_terms.remove(&doc_id) else { return false; };
        for term in tf.keys() {
            if let Some(plist) = self.postings.get_mut(term) {
                plist.remove(&doc_id);
                if plist.is_empty() {
                    self.postings.remove(term);
                }
            }
        }
        self.docs.remove(&doc_id);
        true
    }

    pub fn postings(&self, term: &str) -> Option<&Postings> { self.postings.get(term) }

    /// Natural log of live docs over docs containing the term. `None` for unindexed terms.
    pub fn inverse_document_freq(&self, term: &str) -> Option<f64> {
        let df = self.postings.get(term)?.len();
        Some((self.num_docs() as f64 / df as f64).ln())
    }

    pub fn term_frequencies(&self, doc_id: DocId) -> &TermFrequencies {
        self.doc_terms.get(&doc_id).unwrap_or(&EMPTY_FREQUENCIES)
    }

    pub fn document(&self, doc_id: DocId) -> Option<&DocumentData> { self.docs.get(&doc_id) }

    pub fn doc_ids(&self) -> DocumentIds<'_> { self.doc_terms.keys().copied() }

    #[cfg(test)]
    pub fn num_terms(&self) -> usize { self.postings.len() }
}
