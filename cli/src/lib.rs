use anyhow::{Context, Result};
use engine::{DocId, DocumentStatus, SearchEngine};
use serde::Deserialize;
use walkdir::WalkDir;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

fn is_document_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|s| s.to_str()), Some("json" | "jsonl"))
}

/// Collect `.json` / `.jsonl` files under `input` (a file or a directory), sorted by path.
/// A single file is taken as given, whatever its extension.
pub fn input_files(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }
    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_document_file(e.path()))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

pub fn read_documents(file: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        let mut docs = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let doc: InputDoc = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}", file.display(), lineno + 1))?;
            docs.push(doc);
        }
        return Ok(docs);
    }
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(|v| Ok(serde_json::from_value::<InputDoc>(v)?))
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(json)?]),
        _ => Ok(Vec::new()),
    }
}

/// Build an engine from every document found under `input`.
pub fn load_engine(input: &Path, stop_words: &str) -> Result<SearchEngine> {
    let mut engine = SearchEngine::from_stop_words_text(stop_words)?;
    for file in input_files(input) {
        for doc in read_documents(&file)? {
            engine
                .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
                .with_context(|| format!("indexing document {} from {}", doc.id, file.display()))?;
        }
    }
    tracing::info!(num_docs = engine.document_count(), stop_words = engine.stop_words().len(), "documents loaded");
    Ok(engine)
}
