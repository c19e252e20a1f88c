//! Collaborator contracts for the graph store
//!
//! The store itself is external. This crate needs two capabilities from it:
//! a [`Session`] that executes nGQL text, and a [`StorageClient`] that opens
//! paginated scans over one tag or edge type.

use super::value::{ResultSet, Value};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported across the store boundary
#[derive(Debug, Error)]
pub enum SessionError {
    /// The store executed the request and reported failure
    #[error("store rejected query: {0}")]
    Rejected(String),

    /// The session can no longer reach the store. There is no reconnect;
    /// every later call fails the same way.
    #[error("session unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SessionError {
    /// The message as the store (or transport) phrased it
    pub fn store_message(&self) -> String {
        match self {
            SessionError::Rejected(msg) | SessionError::Unavailable(msg) => msg.clone(),
            SessionError::Io(e) => e.to_string(),
        }
    }
}

/// Result type for store calls
pub type SessionResult<T> = Result<T, SessionError>;

/// One page of scan records
pub type ScanPage = Vec<Value>;

/// Executes query text against the store
///
/// A session is not assumed to be safe for overlapping calls. Callers in
/// this crate await each `execute` before issuing the next one.
#[async_trait]
pub trait Session: Send + Sync {
    /// Execute one or more `;`-separated statements.
    async fn execute(&self, query: &str) -> SessionResult<ResultSet>;

    /// Give the session back to the store. Called once, on shutdown.
    async fn release(&self) -> SessionResult<()> {
        Ok(())
    }
}

/// Pull-based pagination over a scan
///
/// Single pass and not restartable. A consumer loops while `has_next()` is
/// true and stops at the first `None` page even if `has_next()` still
/// reports more data; see [`drain`](super::drain).
#[async_trait]
pub trait ScanCursor: Send {
    /// Whether the store reported more pages
    fn has_next(&self) -> bool;

    /// Fetch the next page, `None` once the stream is exhausted
    async fn next_page(&mut self) -> Option<ScanPage>;
}

/// Opens scans over every vertex of a tag or every edge of a type
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Cursor over node records carrying `tag`
    async fn scan_vertices(&self, space: &str, tag: &str) -> SessionResult<Box<dyn ScanCursor>>;

    /// Cursor over relationship records of `edge_type`
    async fn scan_edges(&self, space: &str, edge_type: &str) -> SessionResult<Box<dyn ScanCursor>>;
}
