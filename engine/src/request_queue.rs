//! Rolling window over recent find requests that tracks how many came back empty.

use crate::document::{Document, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::Result;
use crate::index::DocId;
use std::collections::VecDeque;

/// Window length: one request per minute over a day.
pub const MIN_IN_DAY: usize = 1440;

#[derive(Debug, Clone)]
pub struct RequestQueue {
    requests: VecDeque<bool>, // true when the request returned nothing
    capacity: usize,
    no_result_count: usize,
}

impl Default for RequestQueue {
    fn default() -> Self { Self::new() }
}

impl RequestQueue {
    pub fn new() -> Self { Self::with_capacity(MIN_IN_DAY) }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { requests: VecDeque::with_capacity(capacity), capacity, no_result_count: 0 }
    }

    pub fn add_find_request(&mut self, engine: &SearchEngine, raw_query: &str) -> Result<Vec<Document>> {
        let docs = engine.find_top_documents(raw_query)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    pub fn add_find_request_by_status(&mut self, engine: &SearchEngine, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        let docs = engine.find_top_documents_by_status(raw_query, status)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    pub fn add_find_request_with<F>(&mut self, engine: &SearchEngine, raw_query: &str, predicate: F) -> Result<Vec<Document>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let docs = engine.find_top_documents_with(raw_query, predicate)?;
        self.record(docs.is_empty());
        Ok(docs)
    }

    /// Empty results among the requests currently inside the window.
    pub fn no_result_requests(&self) -> usize { self.no_result_count }

    pub fn len(&self) -> usize { self.requests.len() }

    pub fn is_empty(&self) -> bool { self.requests.is_empty() }

    fn record(&mut self, empty: bool) {
        if self.requests.len() == self.capacity {
            if let Some(true) = self.requests.pop_front() {
                self.no_result_count -= 1;
            }
        }
        self.requests.push_back(empty);
        if empty {
            self.no_result_count += 1;
        }
    }
}
