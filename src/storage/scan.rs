//! Draining scan cursors

use super::traits::ScanCursor;
use super::value::Value;
use tracing::debug;

/// Read every page of `cursor`, handing each record to `visit` in order.
///
/// Stops on the first absent page even when the cursor still claims more
/// data; some store responses keep `has_next()` true forever. A `visit`
/// error stops the scan and is returned as-is.
///
/// Returns the number of pages read.
pub async fn drain<E, F>(cursor: &mut dyn ScanCursor, mut visit: F) -> Result<usize, E>
where
    F: FnMut(&Value) -> Result<(), E>,
{
    let mut pages = 0;

    while cursor.has_next() {
        let Some(page) = cursor.next_page().await else {
            debug!(pages, "scan cursor returned an empty page, stopping");
            break;
        };
        pages += 1;
        debug!(page = pages, records = page.len(), "scan page");

        for record in &page {
            visit(record)?;
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{NodeRecord, ResponseError, ScanPage};
    use async_trait::async_trait;
    use std::collections::VecDeque;

    /// Cursor that always claims more data
    struct EndlessCursor {
        pages: VecDeque<Option<ScanPage>>,
        calls: usize,
    }

    impl EndlessCursor {
        fn new(pages: Vec<Option<ScanPage>>) -> Self {
            Self {
                pages: pages.into(),
                calls: 0,
            }
        }
    }

    #[async_trait]
    impl ScanCursor for EndlessCursor {
        fn has_next(&self) -> bool {
            true
        }

        async fn next_page(&mut self) -> Option<ScanPage> {
            self.calls += 1;
            self.pages.pop_front().flatten()
        }
    }

    fn page(ids: &[&str]) -> Option<ScanPage> {
        Some(ids.iter().map(|id| NodeRecord::new(*id).into()).collect())
    }

    #[tokio::test]
    async fn stops_at_first_absent_page() {
        let mut cursor = EndlessCursor::new(vec![page(&["a", "b"]), page(&["c"]), None, page(&["d"])]);
        let mut seen = Vec::new();

        let pages = drain(&mut cursor, |v| {
            seen.push(v.as_node()?.vid.to_string());
            Ok::<_, ResponseError>(())
        })
        .await
        .unwrap();

        assert_eq!(pages, 2);
        assert_eq!(cursor.calls, 3);
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn visitor_error_stops_scan() {
        let mut cursor = EndlessCursor::new(vec![
            Some(vec![Value::Int(1)]),
            page(&["never-read"]),
        ]);

        let result = drain(&mut cursor, |v| v.as_node().map(|_| ())).await;

        assert!(matches!(result, Err(ResponseError::UnexpectedValue { .. })));
        assert_eq!(cursor.calls, 1);
    }
}
