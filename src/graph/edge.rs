//! Labeled edges between vertices

use super::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// A directed edge carrying one integer label (the event id)
///
/// Serializes as a `[source, target, label]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge(pub VertexId, pub VertexId, pub i64);

impl Edge {
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>, label: i64) -> Self {
        Self(source.into(), target.into(), label)
    }

    pub fn source(&self) -> &VertexId {
        &self.0
    }

    pub fn target(&self) -> &VertexId {
        &self.1
    }

    pub fn label(&self) -> i64 {
        self.2
    }
}

/// Endpoints of an edge with direction erased
///
/// Two edges with the same `PairKey` describe the same undirected connection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct PairKey(VertexId, VertexId);

impl PairKey {
    pub(crate) fn new(a: &VertexId, b: &VertexId) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_ignores_direction() {
        let a = VertexId::from("Alice");
        let b = VertexId::from("Bob");
        assert_eq!(PairKey::new(&a, &b), PairKey::new(&b, &a));
    }

    #[test]
    fn edge_serializes_as_triple() {
        let json = serde_json::to_value(Edge::new("Alice", "Bob", 7)).unwrap();
        assert_eq!(json, serde_json::json!(["Alice", "Bob", 7]));
    }
}
