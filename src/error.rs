//! Error types for playlist extraction and export.
//!
//! Two layers exist:
//!
//! - [`FetchError`] describes why the catalog collaborator could not deliver
//!   metadata or a page of items.
//! - [`Error`] is what the library hands back to a shell. Extraction is
//!   all-or-nothing, so a single [`FetchError`] anywhere in the page chain
//!   surfaces as [`Error::Fetch`] and no partial result is produced.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure reported by a [`PageFetcher`](crate::playlist::PageFetcher).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("playlist not found: {0}")]
    NotFound(String),

    #[error("unauthorized, check client id and secret: {0}")]
    Unauthorized(String),

    #[error("access denied, the playlist is private or inaccessible: {0}")]
    Forbidden(String),

    #[error("rate limited by the catalog API{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    #[error("catalog API responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response payload: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

/// Error returned by the public pipeline and shell helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed playlist reference: {0:?}")]
    MalformedReference(String),

    #[error("failed to fetch playlist: {0}")]
    Fetch(#[from] FetchError),

    #[error("missing configuration value {0}")]
    MissingConfig(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    match retry_after {
        Some(secs) => format!(", retry after {}s", secs),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
