use crate::document::Document;
use std::cmp::Ordering;

/// Maximum number of hits returned by a find request.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal and ordered by rating.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Higher relevance first; near-equal relevance falls back to higher rating.
///
/// Not a total order: near-equality does not chain. Use [`sort_hits`] rather than
/// handing this to `sort_by`.
pub fn compare_hits(lhs: &Document, rhs: &Document) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < RELEVANCE_EPSILON {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance.total_cmp(&lhs.relevance)
    }
}

/// Sort best first. After sorting, no adjacent pair compares `Greater` under
/// [`compare_hits`]; equal hits keep their input order.
pub fn sort_hits(hits: &mut [Document]) {
    hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    // insertion pass: only neighbours within epsilon of each other ever swap
    for i in 1..hits.len() {
        let mut j = i;
        while j > 0 && compare_hits(&hits[j - 1], &hits[j]) == Ordering::Greater {
            hits.swap(j - 1, j);
            j -= 1;
        }
    }
}

pub(crate) fn rank(mut hits: Vec<Document>) -> Vec<Document> {
    sort_hits(&mut hits);
    hits.truncate(MAX_RESULT_DOCUMENT_COUNT);
    hits
}
