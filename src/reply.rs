//! Uniform success/error values for calling layers
//!
//! HTTP views and the CLI render every outcome the same way:
//! `{"success": {...}}` or `{"error": {...}}`.

use crate::error::ClientError;
use crate::load::LoadReport;
use serde::{Deserialize, Serialize};

/// Payload of a [`Reply`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyBody {
    pub message: String,
    /// Rows committed, for load outcomes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Success(ReplyBody),
    Error(ReplyBody),
}

impl Reply {
    pub fn success(message: impl Into<String>) -> Self {
        Reply::Success(ReplyBody {
            message: message.into(),
            committed: None,
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        Reply::Error(ReplyBody {
            message: message.into(),
            committed: None,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Reply::Success(_))
    }

    /// Reply for a finished or failed load
    pub fn from_load(result: &Result<LoadReport, ClientError>) -> Self {
        match result {
            Ok(report) => Reply::Success(ReplyBody {
                message: format!("{} rows inserted successfully", report.committed),
                committed: Some(report.committed),
            }),
            Err(e) => Reply::from(e),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&ClientError> for Reply {
    fn from(e: &ClientError) -> Self {
        Reply::Error(ReplyBody {
            message: e.message(),
            committed: e.committed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::read_rows;
    use crate::storage::SessionError;
    use serde_json::json;

    #[test]
    fn success_is_keyed_by_success() {
        let reply = Reply::from_load(&Ok(LoadReport {
            committed: 3,
            input_rows: 10,
        }));
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"success": {"message": "3 rows inserted successfully", "committed": 3}})
        );
    }

    #[test]
    fn malformed_csv_reports_nothing_committed() {
        let err = ClientError::from(read_rows("1,A\n".as_bytes(), false).unwrap_err());
        let reply = Reply::from(&err);
        assert!(!reply.is_success());

        let value: serde_json::Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();
        assert_eq!(value["error"]["committed"], json!(0));
        assert!(value["error"]["message"].as_str().unwrap().starts_with("invalid input rows"));
        assert!(value.get("success").is_none());
    }

    #[test]
    fn store_error_carries_store_message() {
        let err = ClientError::Store(SessionError::Rejected("SpaceNotFound".into()));
        let reply = Reply::from(&err);
        assert!(!reply.is_success());
        assert_eq!(
            serde_json::to_value(&reply).unwrap(),
            json!({"error": {"message": "SpaceNotFound"}})
        );
    }
}
