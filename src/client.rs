//! GraphClient: the main entry point for store access

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::graph::{Edge, GraphModel, VertexId};
use crate::graphml;
use crate::load::{BulkLoader, LoadReport, Row, RowLimit};
use crate::query::{Subgraph, SubgraphOutput, SubgraphQuery, SubgraphView};
use crate::storage::{drain, ResponseError, Session, StorageClient};
use std::sync::Arc;
use tracing::info;

/// Client over one store session
///
/// Built once by the host from a session and a scan client, then shared by
/// reference. The session is never reconnected: once it fails, every later
/// call fails too. Calls are awaited one at a time, so a client must not be
/// driven from several tasks at once unless the session tolerates it.
pub struct GraphClient {
    session: Arc<dyn Session>,
    storage: Arc<dyn StorageClient>,
    config: ClientConfig,
}

impl GraphClient {
    pub fn new(session: Arc<dyn Session>, storage: Arc<dyn StorageClient>, config: ClientConfig) -> Self {
        Self {
            session,
            storage,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ids of every vertex carrying the configured tag
    pub async fn all_vertices(&self) -> ClientResult<Vec<VertexId>> {
        let mut cursor = self
            .storage
            .scan_vertices(&self.config.space, &self.config.vertex_tag)
            .await?;

        let mut vertices = Vec::new();
        drain(&mut *cursor, |record| {
            vertices.push(record.as_node()?.id().clone());
            Ok::<_, ResponseError>(())
        })
        .await?;

        info!(count = vertices.len(), "scanned vertices");
        Ok(vertices)
    }

    /// Every edge of the configured type, labeled by the configured key
    pub async fn all_edges(&self) -> ClientResult<Vec<Edge>> {
        let mut cursor = self
            .storage
            .scan_edges(&self.config.space, &self.config.edge_type)
            .await?;

        let label_key = self.config.label_key.as_str();
        let mut edges = Vec::new();
        drain(&mut *cursor, |record| {
            let rel = record.as_relationship()?;
            let label = rel.int_property(label_key)?;
            edges.push(Edge(rel.source_id().clone(), rel.target_id().clone(), label));
            Ok::<_, ResponseError>(())
        })
        .await?;

        info!(count = edges.len(), "scanned edges");
        Ok(edges)
    }

    /// The whole graph as scanned lists
    pub async fn dump(&self) -> ClientResult<Subgraph> {
        let vertices = self.all_vertices().await?;
        let edges = self.all_edges().await?;
        Ok(Subgraph::new(vertices, edges))
    }

    /// The whole graph as a GraphML document
    pub async fn dump_graphml(&self) -> ClientResult<String> {
        let dump = self.dump().await?;
        let model: GraphModel = dump.to_model();
        Ok(graphml::encode(&model)?)
    }

    /// Everything reachable from `seed`, rendered for `view`
    pub async fn subgraph(&self, seed: impl Into<VertexId>, view: SubgraphView) -> ClientResult<SubgraphOutput> {
        let query = SubgraphQuery::from(seed)
            .in_space(&self.config.space)
            .label_key(&self.config.label_key);

        let subgraph = query.execute(self.session.as_ref()).await?;
        Ok(subgraph.render(view)?)
    }

    /// Load rows through the session, see [`BulkLoader::load`]
    pub async fn load(&self, rows: Vec<Row>, limit: RowLimit) -> ClientResult<LoadReport> {
        let loader = BulkLoader::new(self.session.clone(), self.config.clone());
        Ok(loader.load(rows, limit).await?)
    }

    /// Release the session. The client cannot be used afterwards.
    pub async fn close(self) -> ClientResult<()> {
        self.session.release().await?;
        info!("session released");
        Ok(())
    }
}
