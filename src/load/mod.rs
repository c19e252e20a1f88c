//! Bulk loading of relationship rows
//!
//! Rows of `(event_id, person_a, person_b)` become two vertex upserts and
//! one edge insert each, committed one row at a time.

mod loader;
mod rows;
mod sample;

pub use loader::{BulkLoader, LoadError, LoadReport, RowFailure};
pub use rows::{read_rows, Row, RowsError};
pub use sample::{sample_rows, RowLimit};
