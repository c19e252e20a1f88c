//! Store boundary for relgraph
//!
//! The store is reached through the `Session` and `StorageClient` traits.
//! `ScriptSession` is the one in-crate `Session`, writing statements to a
//! text sink instead of a live store.

mod scan;
mod script;
mod traits;
mod value;

pub use scan::drain;
pub use script::ScriptSession;
pub use traits::{ScanCursor, ScanPage, Session, SessionError, SessionResult, StorageClient};
pub use value::{NodeRecord, Properties, RelationshipRecord, ResponseError, ResultSet, Value};
