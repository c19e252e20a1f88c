//! Tabular input rows

use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

/// Errors reading input rows
#[derive(Debug, Error)]
pub enum RowsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },
}

/// One relationship record: two people linked by an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub event_id: i64,
    pub person_a: String,
    pub person_b: String,
}

impl Row {
    pub fn new(event_id: i64, person_a: impl Into<String>, person_b: impl Into<String>) -> Self {
        Self {
            event_id,
            person_a: person_a.into(),
            person_b: person_b.into(),
        }
    }
}

/// Read rows from CSV.
///
/// Columns are positional: event id, first person, second person. Header
/// names are not inspected and extra columns are ignored.
pub fn read_rows(input: impl Read, has_headers: bool) -> Result<Vec<Row>, RowsError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let malformed = |reason: String| RowsError::Malformed { line, reason };

        if record.len() < 3 {
            return Err(malformed(format!("expected 3 columns, found {}", record.len())));
        }
        let event_id = record[0]
            .parse::<i64>()
            .map_err(|e| malformed(format!("event id '{}': {}", &record[0], e)))?;

        rows.push(Row::new(event_id, &record[1], &record[2]));
    }
    Ok(rows)
}
