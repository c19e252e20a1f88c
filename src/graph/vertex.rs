//! Vertex identifiers

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest vid the store accepts (`FIXED_STRING(255)`), in bytes.
pub const MAX_VERTEX_ID_BYTES: usize = 255;

/// Why a string cannot be used as a vertex id in a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VertexIdError {
    #[error("vertex id is empty")]
    Empty,

    #[error("vertex id is {0} bytes, the store accepts at most {MAX_VERTEX_ID_BYTES}")]
    TooLong(usize),
}

/// Opaque vertex identifier (a person's full name in the event dataset)
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    /// Wrap an id read back from the store. No length check is applied,
    /// whatever the store returns is taken as-is.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id destined for a write, enforcing the store's fixed width.
    pub fn checked(id: impl Into<String>) -> Result<Self, VertexIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(VertexIdError::Empty);
        }
        if id.len() > MAX_VERTEX_ID_BYTES {
            return Err(VertexIdError::TooLong(id.len()));
        }
        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
