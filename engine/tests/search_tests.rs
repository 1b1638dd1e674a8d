use engine::{remove_duplicates, paginate, DocumentStatus, SearchEngine, SearchError};

fn ids(docs: &[engine::Document]) -> Vec<u32> {
    docs.iter().map(|d| d.id).collect()
}

#[test]
fn it_ranks_by_relevance_then_rating() {
    let mut engine = SearchEngine::new(["и", "в", "на"]).unwrap();
    engine.add_document(0, "белый кот и модный ошейник", DocumentStatus::Active, &[8, -3]).unwrap();
    engine.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    engine.add_document(2, "ухоженный пёс выразительные глаза", DocumentStatus::Active, &[5, -12, 2, 1]).unwrap();
    engine.add_document(3, "ухоженный скворец евгений", DocumentStatus::Banned, &[9]).unwrap();

    let docs = engine.find_top_documents("пушистый ухоженный кот").unwrap();
    assert_eq!(ids(&docs), vec![1, 0, 2]);
    assert_eq!(docs.iter().map(|d| d.rating).collect::<Vec<_>>(), vec![5, 2, -1]);
    // docs 0 and 2 tie on relevance, rating decides
    assert!((docs[1].relevance - docs[2].relevance).abs() < 1e-6);

    let banned = engine.find_top_documents_by_status("пушистый ухоженный кот", DocumentStatus::Banned).unwrap();
    assert_eq!(ids(&banned), vec![3]);

    let even = engine.find_top_documents_with("пушистый ухоженный кот", |id, _, _| id % 2 == 0).unwrap();
    assert_eq!(ids(&even), vec![0, 2]);
}

#[test]
fn it_excludes_stop_words_from_index() {
    let mut engine = SearchEngine::default();
    engine.add_document(42, "cat in the city", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    assert_eq!(ids(&engine.find_top_documents("in").unwrap()), vec![42]);

    let mut engine = SearchEngine::from_stop_words_text("in the").unwrap();
    engine.add_document(42, "cat in the city", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    assert!(engine.find_top_documents("in").unwrap().is_empty());
    assert_eq!(engine.word_frequencies(42).len(), 2);
}

#[test]
fn it_rejects_invalid_input() {
    assert!(matches!(SearchEngine::new(["ok", "bad\u{1f}"]), Err(SearchError::InvalidTerm(_))));

    let mut engine = SearchEngine::default();
    engine.add_document(1, "cat", DocumentStatus::Active, &[1]).unwrap();
    assert_eq!(
        engine.add_document(1, "dog", DocumentStatus::Active, &[1]),
        Err(SearchError::DuplicateDocumentId(1))
    );
    assert!(matches!(engine.find_top_documents("cat \u{0}"), Err(SearchError::InvalidTerm(_))));
    assert!(matches!(engine.match_document("cat --dog", 1), Err(SearchError::MalformedQueryTerm(_))));
    assert_eq!(engine.match_document("cat", 2), Err(SearchError::UnknownDocumentId(2)));
    // engine stays usable after failures
    assert_eq!(ids(&engine.find_top_documents("cat").unwrap()), vec![1]);
}

#[test]
fn it_removes_duplicates_keeping_lowest_id() {
    let mut engine = SearchEngine::default();
    engine.add_document(2, "word1 word2 word3", DocumentStatus::Active, &[1]).unwrap();
    engine.add_document(3, "word3 word2 word1 word1", DocumentStatus::Active, &[1]).unwrap();
    engine.add_document(4, "word2 word2 word1 word3 word3", DocumentStatus::Banned, &[1]).unwrap();
    engine.add_document(5, "word1 word2 word3 word4", DocumentStatus::Active, &[1]).unwrap();
    engine.add_document(6, "word1 word2", DocumentStatus::Active, &[1]).unwrap();

    let removed = remove_duplicates(&mut engine);
    assert_eq!(removed, vec![3, 4]);
    assert_eq!(engine.document_ids().collect::<Vec<_>>(), vec![2, 5, 6]);
}

#[test]
fn it_paginates_results() {
    let mut engine = SearchEngine::from_stop_words_text("и в на").unwrap();
    engine.add_document(1, "пушистый кот пушистый хвост", DocumentStatus::Active, &[7, 2, 7]).unwrap();
    engine.add_document(2, "пушистый пёс и модный ошейник", DocumentStatus::Active, &[1, 2, 3]).unwrap();
    engine.add_document(3, "большой кот модный ошейник ", DocumentStatus::Active, &[1, 2, 8]).unwrap();
    engine.add_document(4, "большой пёс скворец евгений", DocumentStatus::Active, &[1, 3, 2]).unwrap();
    engine.add_document(5, "большой пёс скворец василий", DocumentStatus::Active, &[1, 1, 1]).unwrap();

    let results = engine.find_top_documents("пушистый пёс").unwrap();
    assert_eq!(results.len(), 4);
    let pages = paginate(&results, 2);
    assert_eq!(pages.len(), 2);
    assert!(pages.iter().all(|p| p.len() == 2));
}

#[test]
fn it_ranks_many_near_equal_relevances() {
    // tf of "x" is 1/n, so neighbouring documents differ by well under 1e-6
    let mut engine = SearchEngine::default();
    for (id, n) in (1000u32..1300).enumerate() {
        let mut words = vec!["x".to_string()];
        words.extend((1..n).map(|k| format!("f{k}")));
        let rating = ((id as u32 * 7919) % 9) as i32;
        engine.add_document(id as u32, &words.join(" "), DocumentStatus::Active, &[rating]).unwrap();
    }
    for id in 300..600 {
        engine.add_document(id, "y", DocumentStatus::Active, &[0]).unwrap();
    }

    let docs = engine.find_top_documents("x").unwrap();
    assert_eq!(docs.len(), 5);
    for pair in docs.windows(2) {
        if (pair[0].relevance - pair[1].relevance).abs() < 1e-6 {
            assert!(pair[0].rating >= pair[1].rating);
        } else {
            assert!(pair[0].relevance > pair[1].relevance);
        }
    }
    let all = engine.find_top_documents_with("x", |_, _, rating| rating == 8).unwrap();
    assert!(all.iter().all(|d| d.rating == 8));
}
