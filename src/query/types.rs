//! Subgraph result structures

use crate::graph::{Edge, GraphModel, VertexId};
use crate::graphml::{self, EncodeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a subgraph is handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubgraphView {
    /// `{vertices, edges}` lists
    #[default]
    Structured,
    /// A GraphML document
    Graphml,
}

impl FromStr for SubgraphView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "structured" | "json" => Ok(SubgraphView::Structured),
            "graphml" => Ok(SubgraphView::Graphml),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

/// Vertices and edges parsed from a store response, in source order
///
/// Unlike [`GraphModel`] this keeps duplicates and direction exactly as
/// the store reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<Edge>,
}

impl Subgraph {
    pub fn new(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    /// Collapse into a deduplicated undirected model
    pub fn to_model(&self) -> GraphModel {
        GraphModel::from_parts(self.vertices.iter().cloned(), self.edges.iter().cloned())
    }

    /// Shape the subgraph for `view`
    pub fn render(self, view: SubgraphView) -> Result<SubgraphOutput, EncodeError> {
        match view {
            SubgraphView::Structured => Ok(SubgraphOutput::Structured(self)),
            SubgraphView::Graphml => graphml::encode(&self.to_model()).map(SubgraphOutput::Graphml),
        }
    }
}

/// A subgraph rendered for one [`SubgraphView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubgraphOutput {
    Structured(Subgraph),
    Graphml(String),
}

impl SubgraphOutput {
    /// Text form: pretty JSON for structured output, the document for GraphML
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        match self {
            SubgraphOutput::Structured(subgraph) => serde_json::to_string_pretty(subgraph),
            SubgraphOutput::Graphml(doc) => Ok(doc.clone()),
        }
    }
}
