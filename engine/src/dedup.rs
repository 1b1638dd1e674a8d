use crate::engine::SearchEngine;
use crate::index::DocId;
use std::collections::{BTreeSet, HashSet};

/// Remove every document whose term set equals that of a document with a lower id.
///
/// Duplicates are collected over a full pass before anything is removed. Returns the
/// removed ids in ascending order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocId> {
    let duplicates = find_duplicates(engine);
    for &id in &duplicates {
        tracing::info!(doc_id = id, "found duplicate document id");
        engine.remove_document(id);
    }
    duplicates
}

/// Ids that would be removed by [`remove_duplicates`], ascending.
pub fn find_duplicates(engine: &SearchEngine) -> Vec<DocId> {
    let mut seen: HashSet<BTreeSet<&str>> = HashSet::new();
    let mut duplicates = Vec::new();
    // ids arrive ascending, so the first owner of a term set is the lowest id
    for id in engine.document_ids() {
        let terms: BTreeSet<&str> = engine.word_frequencies(id).keys().map(String::as_str).collect();
        if !seen.insert(terms) {
            duplicates.push(id);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    fn engine_with_duplicates() -> SearchEngine {
        let mut engine = SearchEngine::from_stop_words_text("and with").unwrap();
        let docs = [
            (1, "funny pet and nasty rat", &[7, 2, 7][..]),
            (2, "funny pet with curly hair", &[1, 2]),
            (3, "funny pet with curly hair", &[1, 2]),
            (4, "funny pet and curly hair", &[1, 2]),
            (5, "funny funny pet and nasty nasty rat", &[1, 2]),
            (6, "funny pet and not very nasty rat", &[1, 2]),
            (7, "very nasty rat and not very funny pet", &[1, 2]),
            (8, "pet with rat and rat and rat", &[1, 2]),
            (9, "nasty rat with curly hair", &[1, 2]),
        ];
        for (id, text, ratings) in docs {
            engine.add_document(id, text, DocumentStatus::Active, ratings).unwrap();
        }
        engine
    }

    #[test]
    fn keeps_lowest_id_of_each_group() {
        let mut engine = engine_with_duplicates();
        let removed = remove_duplicates(&mut engine);
        assert_eq!(removed, vec![3, 4, 5, 7]);
        assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![1, 2, 6, 8, 9]);
        for id in [3, 4, 5, 7] {
            assert!(engine.word_frequencies(id).is_empty());
        }
    }

    #[test]
    fn second_pass_removes_nothing() {
        let mut engine = engine_with_duplicates();
        remove_duplicates(&mut engine);
        assert!(remove_duplicates(&mut engine).is_empty());
        assert_eq!(engine.document_count(), 5);
    }

    #[test]
    fn documents_of_only_stop_words_are_duplicates() {
        let mut engine = SearchEngine::from_stop_words_text("and with").unwrap();
        engine.add_document(4, "and", DocumentStatus::Active, &[1]).unwrap();
        engine.add_document(2, "with and", DocumentStatus::Banned, &[1]).unwrap();
        assert_eq!(find_duplicates(&engine), vec![4]);
    }
}
