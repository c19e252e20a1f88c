//! Core graph data structures

mod edge;
mod model;
mod vertex;


pub use edge::Edge;
pub use model::GraphModel;
pub use vertex::{VertexId, VertexIdError, MAX_VERTEX_ID_BYTES};
