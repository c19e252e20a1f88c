//! relgraph: client-side access to a distributed graph store
//!
//! Scans vertices and edges in bulk, fetches bounded subgraphs around a
//! seed vertex, exports graphs as GraphML, and bulk-loads tabular
//! relationship data.
//!
//! # Core Concepts
//!
//! - **Session / StorageClient**: the store boundary. The store executes nGQL
//!   text and serves paginated scans; this crate only builds requests and
//!   interprets responses.
//! - **GraphModel**: an undirected graph of vertex ids and labeled edges,
//!   built fresh for each export.
//! - **GraphClient**: one value owning the session, passed to every
//!   operation instead of living in global state.
//!
//! # Example
//!
//! ```
//! use relgraph::{graphml, GraphModel};
//!
//! let mut graph = GraphModel::new();
//! graph.add_edge("Alice", "Bär", 42);
//! let doc = graphml::encode(&graph).unwrap();
//! assert!(doc.contains("Bär"));
//! ```

mod client;
pub mod config;
mod error;
mod graph;
pub mod graphml;
pub mod load;
pub mod logging;
pub mod query;
mod reply;
pub mod storage;

pub use client::GraphClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{ClientError, ClientResult};
pub use graph::{Edge, GraphModel, VertexId, VertexIdError, MAX_VERTEX_ID_BYTES};
pub use load::{BulkLoader, LoadError, LoadReport, Row, RowLimit};
pub use query::{Subgraph, SubgraphOutput, SubgraphQuery, SubgraphView};
pub use reply::{Reply, ReplyBody};
pub use storage::{ScanCursor, ScriptSession, Session, SessionError, StorageClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
