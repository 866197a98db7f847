//! Dashboard Errors
//!
//! Every failure a backend round-trip or a form submission can produce.

use serde_json::Value;

/// Failure taxonomy shared by the transport, the controller and the forms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// Network/connection error before any response arrived
    #[error("connection error: {0}")]
    Transport(String),

    /// Non-2xx response; message extracted from the body
    #[error("{0}")]
    RequestFailed(String),

    /// Response body was not valid JSON or did not match the expected shape
    #[error("invalid response: {0}")]
    DecodeFailed(String),

    /// Request body could not be serialized
    #[error("could not encode request: {0}")]
    EncodeFailed(String),

    /// Missing or invalid form field, caught before any network call
    #[error("{0}")]
    Validation(String),

    /// Aggregate query answered but carried an `errors` array
    #[error("query reported errors: {}", .messages.join("; "))]
    PartialQuery {
        messages: Vec<String>,
        /// Whole response body, kept for the raw view
        payload: Value,
    },
}

impl DashboardError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_query_message_joins_errors() {
        let err = DashboardError::PartialQuery {
            messages: vec!["bad field".into(), "no plans".into()],
            payload: json!({ "errors": [] }),
        };
        assert_eq!(err.to_string(), "query reported errors: bad field; no plans");
    }

    #[test]
    fn test_request_failed_shows_backend_message_verbatim() {
        let err = DashboardError::RequestFailed("Task not found".into());
        assert_eq!(err.to_string(), "Task not found");
    }
}
