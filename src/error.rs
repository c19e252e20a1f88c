//! Client-level errors

use crate::config::ConfigError;
use crate::graphml::EncodeError;
use crate::load::{LoadError, RowsError};
use crate::storage::{ResponseError, SessionError};
use thiserror::Error;

/// Errors that can occur in relgraph operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Store(#[from] SessionError),

    #[error("malformed store response: {0}")]
    Response(#[from] ResponseError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid input rows: {0}")]
    Rows(#[from] RowsError),

    #[error("GraphML encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Rows committed before a load failed, if this is a load failure.
    /// Rejected input never reaches the store.
    pub fn committed(&self) -> Option<usize> {
        match self {
            ClientError::Load(e) => Some(e.committed),
            ClientError::Rows(_) => Some(0),
            _ => None,
        }
    }

    /// Message for the calling layer. Store failures carry the store's own
    /// wording.
    pub fn message(&self) -> String {
        match self {
            ClientError::Store(e) => e.store_message(),
            ClientError::Load(e) => e.message(),
            other => other.to_string(),
        }
    }
}

/// Result type for relgraph operations
pub type ClientResult<T> = Result<T, ClientError>;
