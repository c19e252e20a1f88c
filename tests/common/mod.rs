//! Common test utilities for relgraph integration tests
//!
//! Scripted stand-ins for the store collaborators: a session that records
//! queries and replays canned responses, and scan clients serving fixed
//! pages.

pub mod mock_store;

pub use mock_store::{event, node, PagedCursor, ScriptedSession, ScriptedStorage};
