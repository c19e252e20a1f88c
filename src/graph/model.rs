//! GraphModel: the in-memory undirected graph built per request

use super::edge::{Edge, PairKey};
use super::vertex::VertexId;
use std::collections::{BTreeMap, BTreeSet};

/// An undirected graph of vertex ids and labeled edges
///
/// Edges are keyed by their unordered endpoint pair, so adding a second edge
/// between the same two vertices (in either direction) replaces the first.
/// Vertices and edges iterate in sorted order, which makes anything encoded
/// from the model byte-for-byte reproducible.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    vertices: BTreeSet<VertexId>,
    edges: BTreeMap<PairKey, Edge>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from vertex and edge lists.
    ///
    /// Edge endpoints missing from `vertices` are added.
    pub fn from_parts<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = VertexId>,
        E: IntoIterator<Item = Edge>,
    {
        let mut model = Self::new();
        for id in vertices {
            model.add_vertex(id);
        }
        for edge in edges {
            model.insert_edge(edge);
        }
        model
    }

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> bool {
        self.vertices.insert(id.into())
    }

    /// Add an edge, adding both endpoints as vertices.
    ///
    /// If the unordered pair already has an edge it is replaced, label and
    /// orientation included. Returns the label that was overwritten.
    pub fn add_edge(
        &mut self,
        source: impl Into<VertexId>,
        target: impl Into<VertexId>,
        label: i64,
    ) -> Option<i64> {
        self.insert_edge(Edge(source.into(), target.into(), label))
    }

    fn insert_edge(&mut self, edge: Edge) -> Option<i64> {
        if !self.vertices.contains(edge.source()) {
            self.vertices.insert(edge.source().clone());
        }
        if !self.vertices.contains(edge.target()) {
            self.vertices.insert(edge.target().clone());
        }
        let key = PairKey::new(edge.source(), edge.target());
        self.edges.insert(key, edge).map(|old| old.label())
    }

    pub fn contains_vertex(&self, id: &VertexId) -> bool {
        self.vertices.contains(id)
    }

    /// The edge connecting `a` and `b`, whichever direction it was added in
    pub fn edge_between(&self, a: &VertexId, b: &VertexId) -> Option<&Edge> {
        self.edges.get(&PairKey::new(a, b))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.vertices.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
