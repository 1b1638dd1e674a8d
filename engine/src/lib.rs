//! In-memory full-text search with TF-IDF ranking, minus words, stop words and
//! duplicate removal.

pub mod dedup;
pub mod document;
pub mod engine;
pub mod error;
mod index;
pub mod log_duration;
pub mod paginate;
mod query;
pub mod ranking;
pub mod request_queue;
pub mod tokenizer;

pub use dedup::remove_duplicates;
pub use document::{Document, DocumentStatus};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use index::{DocId, DocumentIds, TermFrequencies};
pub use paginate::{paginate, Paginator};
pub use request_queue::RequestQueue;
