//! Bounded subgraph retrieval from a seed vertex

use super::ngql::{Batch, Statement};
use super::types::Subgraph;
use crate::error::ClientResult;
use crate::graph::{Edge, VertexId};
use crate::storage::{ResponseError, ResultSet, Session};
use tracing::{debug, warn};

/// Hop limit for subgraph traversal. Large enough that, for this data,
/// it means "everything connected to the seed".
pub const SUBGRAPH_MAX_STEPS: u32 = 1000;

/// Column the traversal yields vertex lists under
pub const NODES_COLUMN: &str = "nodes";

/// Column the traversal yields edge lists under
pub const RELATIONSHIPS_COLUMN: &str = "relationships";

/// Query for every vertex and edge reachable from a seed vertex
#[derive(Debug, Clone)]
pub struct SubgraphQuery {
    /// Seed vertex
    pub seed: VertexId,
    /// Graph space to run in
    pub space: String,
    /// Edge property holding the integer label
    pub label_key: String,
}

impl SubgraphQuery {
    /// Create a query rooted at `seed`
    pub fn from(seed: impl Into<VertexId>) -> Self {
        Self {
            seed: seed.into(),
            space: crate::config::DEFAULT_SPACE.to_string(),
            label_key: crate::config::DEFAULT_LABEL_KEY.to_string(),
        }
    }

    /// Set the graph space
    pub fn in_space(mut self, space: impl Into<String>) -> Self {
        self.space = space.into();
        self
    }

    /// Set the edge property read as the label
    pub fn label_key(mut self, key: impl Into<String>) -> Self {
        self.label_key = key.into();
        self
    }

    /// Query text sent to the store
    pub fn to_ngql(&self) -> String {
        Batch::in_space(&self.space)
            .push(Statement::GetSubgraph {
                steps: SUBGRAPH_MAX_STEPS,
                seed: self.seed.clone(),
                vertices_as: NODES_COLUMN.to_string(),
                edges_as: RELATIONSHIPS_COLUMN.to_string(),
            })
            .to_string()
    }

    /// Flatten a traversal response into vertex and edge lists.
    ///
    /// Each cell of both columns is a list of records. Lists are flattened
    /// in row order. Any cell of the wrong shape fails the whole parse.
    pub fn parse(&self, result: &ResultSet) -> Result<Subgraph, ResponseError> {
        let mut vertices = Vec::new();
        for cell in result.column_values(NODES_COLUMN)? {
            for record in cell.as_list()? {
                vertices.push(record.as_node()?.id().clone());
            }
        }

        let mut edges = Vec::new();
        for cell in result.column_values(RELATIONSHIPS_COLUMN)? {
            for record in cell.as_list()? {
                let rel = record.as_relationship()?;
                let label = rel.int_property(&self.label_key)?;
                edges.push(Edge(rel.source_id().clone(), rel.target_id().clone(), label));
            }
        }

        Ok(Subgraph { vertices, edges })
    }

    /// Run the traversal and parse the response.
    ///
    /// A store failure is returned untouched; nothing is parsed from a
    /// failed execution.
    pub async fn execute(&self, session: &dyn Session) -> ClientResult<Subgraph> {
        let query = self.to_ngql();
        debug!(seed = %self.seed, "fetching subgraph");

        let result = session.execute(&query).await.inspect_err(|e| {
            warn!(seed = %self.seed, error = %e, "subgraph query failed");
        })?;

        let subgraph = self.parse(&result)?;
        debug!(
            seed = %self.seed,
            vertices = subgraph.vertices.len(),
            edges = subgraph.edges.len(),
            "subgraph parsed"
        );
        Ok(subgraph)
    }
}
