//! Query construction and response parsing
//!
//! Builds nGQL text for the statements relgraph issues and turns the
//! store's columnar traversal responses into vertex and edge lists.

pub mod ngql;
mod subgraph;
mod types;

pub use ngql::{Batch, Statement};
pub use subgraph::{SubgraphQuery, NODES_COLUMN, RELATIONSHIPS_COLUMN, SUBGRAPH_MAX_STEPS};
pub use types::{Subgraph, SubgraphOutput, SubgraphView};
