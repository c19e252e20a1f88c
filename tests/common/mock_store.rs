//! Scripted store collaborators
//!
//! Deterministic replacements for a live store. Nothing here parses nGQL;
//! responses are matched by substring.

use async_trait::async_trait;
use relgraph::storage::{
    NodeRecord, RelationshipRecord, ResultSet, ScanCursor, ScanPage, Session, SessionError,
    SessionResult, StorageClient, Value,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// A node record for `vid`
pub fn node(vid: &str) -> Value {
    NodeRecord::new(vid).with_tag("person").into()
}

/// An `event` relationship labeled `id`
pub fn event(src: &str, dst: &str, id: i64) -> Value {
    RelationshipRecord::new(src, dst, "event")
        .with_property("event_id", Value::Int(id))
        .into()
}

/// Session that records every query
///
/// Queries containing a registered pattern get the matching response;
/// everything else succeeds with an empty result. The `fail_on`-th call
/// (1-based) is rejected.
#[derive(Default)]
pub struct ScriptedSession {
    queries: Mutex<Vec<String>>,
    responses: Vec<(String, SessionResult<ResultSet>)>,
    fail_on: Option<usize>,
    released: AtomicBool,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, pattern: &str, result: ResultSet) -> Self {
        self.responses.push((pattern.to_string(), Ok(result)));
        self
    }

    pub fn reject(mut self, pattern: &str, message: &str) -> Self {
        self.responses
            .push((pattern.to_string(), Err(SessionError::Rejected(message.to_string()))));
        self
    }

    pub fn fail_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn released(&self) -> bool {
        self.released.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Session for ScriptedSession {
    async fn execute(&self, query: &str) -> SessionResult<ResultSet> {
        let call = {
            let mut queries = self.queries.lock().unwrap();
            queries.push(query.to_string());
            queries.len()
        };

        if Some(call) == self.fail_on {
            return Err(SessionError::Rejected(format!("call {} rejected", call)));
        }

        for (pattern, result) in &self.responses {
            if query.contains(pattern.as_str()) {
                return match result {
                    Ok(rs) => Ok(rs.clone()),
                    Err(e) => Err(SessionError::Rejected(e.store_message())),
                };
            }
        }
        Ok(ResultSet::empty())
    }

    async fn release(&self) -> SessionResult<()> {
        self.released.store(true, Ordering::Relaxed);
        Ok(())
    }
}

/// Cursor over fixed pages
///
/// `endless` keeps `has_next()` true after the pages run out.
pub struct PagedCursor {
    pages: VecDeque<Option<ScanPage>>,
    endless: bool,
    reads: Arc<Mutex<usize>>,
}

impl PagedCursor {
    pub fn new(pages: Vec<Option<ScanPage>>) -> Self {
        Self {
            pages: pages.into(),
            endless: false,
            reads: Arc::new(Mutex::new(0)),
        }
    }

    pub fn endless(mut self) -> Self {
        self.endless = true;
        self
    }

    /// Shared counter of `next_page` calls
    pub fn read_counter(&self) -> Arc<Mutex<usize>> {
        self.reads.clone()
    }
}

#[async_trait]
impl ScanCursor for PagedCursor {
    fn has_next(&self) -> bool {
        self.endless || !self.pages.is_empty()
    }

    async fn next_page(&mut self) -> Option<ScanPage> {
        *self.reads.lock().unwrap() += 1;
        self.pages.pop_front().flatten()
    }
}

/// Scan client handing out one prepared cursor per scan kind
#[derive(Default)]
pub struct ScriptedStorage {
    vertex_pages: Vec<Option<ScanPage>>,
    edge_pages: Vec<Option<ScanPage>>,
    unavailable: bool,
    scans: Mutex<Vec<(String, String)>>,
}

impl ScriptedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_pages(mut self, pages: Vec<Option<ScanPage>>) -> Self {
        self.vertex_pages = pages;
        self
    }

    pub fn edge_pages(mut self, pages: Vec<Option<ScanPage>>) -> Self {
        self.edge_pages = pages;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// `(space, tag or edge type)` of every scan opened
    pub fn scans(&self) -> Vec<(String, String)> {
        self.scans.lock().unwrap().clone()
    }

    fn open(&self, space: &str, name: &str, pages: &[Option<ScanPage>]) -> SessionResult<Box<dyn ScanCursor>> {
        self.scans.lock().unwrap().push((space.to_string(), name.to_string()));
        if self.unavailable {
            return Err(SessionError::Unavailable("storaged unreachable".into()));
        }
        Ok(Box::new(PagedCursor::new(pages.to_vec())))
    }
}

#[async_trait]
impl StorageClient for ScriptedStorage {
    async fn scan_vertices(&self, space: &str, tag: &str) -> SessionResult<Box<dyn ScanCursor>> {
        self.open(space, tag, &self.vertex_pages)
    }

    async fn scan_edges(&self, space: &str, edge_type: &str) -> SessionResult<Box<dyn ScanCursor>> {
        self.open(space, edge_type, &self.edge_pages)
    }
}
