//! Row-at-a-time bulk loading

use super::rows::Row;
use super::sample::{sample_rows, RowLimit};
use crate::config::ClientConfig;
use crate::graph::{VertexId, VertexIdError};
use crate::query::{Batch, Statement};
use crate::storage::{Session, SessionError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a row could not be committed
#[derive(Debug, Error)]
pub enum RowFailure {
    #[error(transparent)]
    Store(#[from] SessionError),

    #[error("invalid person name: {0}")]
    InvalidVertex(#[from] VertexIdError),
}

/// A load that stopped part way
///
/// Rows before the failing one stay committed; nothing after it was sent.
#[derive(Debug, Error)]
#[error("row {row} (event {event_id}) failed after {committed} rows committed: {failure}")]
pub struct LoadError {
    /// Rows committed before the failure
    pub committed: usize,
    /// 1-based position of the failing row in processing order
    pub row: usize,
    pub event_id: i64,
    #[source]
    pub failure: RowFailure,
}

impl LoadError {
    /// The store's own message when the store rejected the row
    pub fn message(&self) -> String {
        match &self.failure {
            RowFailure::Store(e) => e.store_message(),
            RowFailure::InvalidVertex(e) => e.to_string(),
        }
    }
}

/// Outcome of a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows committed
    pub committed: usize,
    /// Rows in the input before sampling
    pub input_rows: usize,
}

/// Turns rows into vertex and edge upserts, one store call per row
///
/// Each row becomes a single batch: upsert both people (the vid doubles as
/// the name property) and insert a directed edge from the first to the
/// second carrying the event id. Rows commit independently, in order, with
/// no retry.
pub struct BulkLoader {
    session: Arc<dyn Session>,
    config: ClientConfig,
}

impl BulkLoader {
    pub fn new(session: Arc<dyn Session>, config: ClientConfig) -> Self {
        Self { session, config }
    }

    /// The statement batch committing `row`
    pub fn row_batch(&self, row: &Row) -> Result<Batch, VertexIdError> {
        let a = VertexId::checked(row.person_a.as_str())?;
        let b = VertexId::checked(row.person_b.as_str())?;

        Ok(Batch::in_space(&self.config.space)
            .push(self.upsert_vertex(a.clone()))
            .push(self.upsert_vertex(b.clone()))
            .push(Statement::InsertEdge {
                edge_type: self.config.edge_type.clone(),
                property: self.config.label_key.clone(),
                src: a,
                dst: b,
                value: row.event_id,
            }))
    }

    fn upsert_vertex(&self, vid: VertexId) -> Statement {
        Statement::InsertVertex {
            tag: self.config.vertex_tag.clone(),
            property: self.config.vertex_property.clone(),
            value: vid.as_str().to_string(),
            vid,
        }
    }

    /// Load `rows`, stopping at the first failure.
    ///
    /// With [`RowLimit::Sample`] the rows are shuffled (seeded from the
    /// config when it has a seed) and exactly `n` are loaded, or all of them
    /// if there are fewer.
    pub async fn load(&self, rows: Vec<Row>, limit: RowLimit) -> Result<LoadReport, LoadError> {
        let input_rows = rows.len();
        let ordered = sample_rows(rows, limit, self.config.sample_seed);
        info!(input_rows, to_load = ordered.len(), ?limit, "starting bulk load");

        let mut committed = 0;
        for (index, row) in ordered.iter().enumerate() {
            let fail = |failure: RowFailure| LoadError {
                committed,
                row: index + 1,
                event_id: row.event_id,
                failure,
            };

            let batch = self.row_batch(row).map_err(|e| fail(e.into()))?;
            debug!(row = index + 1, event_id = row.event_id, "committing row");

            if let Err(e) = self.session.execute(&batch.to_string()).await {
                warn!(row = index + 1, event_id = row.event_id, error = %e, committed, "row rejected, stopping load");
                return Err(fail(e.into()));
            }
            committed += 1;
        }

        info!(committed, "bulk load complete");
        Ok(LoadReport {
            committed,
            input_rows,
        })
    }
}
