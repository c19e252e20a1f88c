//! A session that writes statements out instead of sending them
//!
//! Useful for generating an nGQL script offline (to be replayed with the
//! store's console) and for dry runs of the bulk loader.

use super::traits::{Session, SessionError, SessionResult};
use super::value::ResultSet;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

/// Writes every executed query as one line of nGQL and reports success
pub struct ScriptSession {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ScriptSession {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Script to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    fn with_writer<T>(&self, f: impl FnOnce(&mut dyn Write) -> std::io::Result<T>) -> SessionResult<T> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| SessionError::Unavailable("script writer poisoned".into()))?;
        Ok(f(&mut **out)?)
    }
}

#[async_trait]
impl Session for ScriptSession {
    async fn execute(&self, query: &str) -> SessionResult<ResultSet> {
        self.with_writer(|out| writeln!(out, "{}", query))?;
        Ok(ResultSet::empty())
    }

    async fn release(&self) -> SessionResult<()> {
        self.with_writer(|out| out.flush())
    }
}
