//! Error types for mf2 operations.

use thiserror::Error;

/// Errors that can occur while parsing a document.
///
/// Extraction itself is fail-open: bad URLs and missing attributes never
/// produce an error. Only a missing root or a tripped resource limit abort
/// a parse.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Root node {0} does not exist in the tree")]
    MissingRoot(u32),

    #[error("Nesting depth exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("Node count exceeds the limit of {limit}")]
    NodeLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
