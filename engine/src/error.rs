use crate::DocId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A stop word, document term or query term contains a control character.
    #[error("invalid term {0:?}: control characters are not allowed")]
    InvalidTerm(String),
    /// A query term is a bare `-` or starts with `--`.
    #[error("malformed query term {0:?}")]
    MalformedQueryTerm(String),
    #[error("document id {0} already exists")]
    DuplicateDocumentId(DocId),
    #[error("document id {0} does not exist")]
    UnknownDocumentId(DocId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
