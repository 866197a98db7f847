//! Aggregate Summary Query

use serde::Deserialize;
use serde_json::{json, Value};

use super::{decode, Transport};
use crate::error::{DashboardError, Result};
use crate::models::PlanNode;

pub const PLANNER_SUMMARY_QUERY: &str = r#"
query PlannerSummary {
  plans {
    id
    name
    buckets {
      id
      name
      planId
      tasks {
        id
        title
        percentComplete
        bucketId
        planId
      }
    }
  }
}
"#;

/// Successful summary: typed plans plus the `data` member for the raw view
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub plans: Vec<PlanNode>,
    pub data: Value,
}

#[derive(Deserialize)]
struct SummaryData {
    #[serde(default)]
    plans: Option<Vec<PlanNode>>,
}

/// Run the summary query. A body with a non-empty `errors` array is a
/// `PartialQuery` failure carrying the whole body.
pub async fn fetch_summary<T: Transport + ?Sized>(transport: &T) -> Result<Summary> {
    let payload = transport.query(PLANNER_SUMMARY_QUERY, json!({})).await?;
    interpret_summary(payload)
}

pub fn interpret_summary(payload: Value) -> Result<Summary> {
    let messages = query_error_messages(&payload);
    if !messages.is_empty() {
        return Err(DashboardError::PartialQuery { messages, payload });
    }
    let data = payload.get("data").cloned().unwrap_or(Value::Null);
    let plans = if data.is_null() {
        Vec::new()
    } else {
        decode::<SummaryData>(data.clone())?.plans.unwrap_or_default()
    };
    Ok(Summary { plans, data })
}

fn query_error_messages(payload: &Value) -> Vec<String> {
    let Some(errors) = payload.get("errors").and_then(Value::as_array) else {
        return Vec::new();
    };
    errors
        .iter()
        .map(|err| match err.get("message").and_then(Value::as_str) {
            Some(msg) => msg.to_string(),
            None => err.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_array_is_partial_failure() {
        let payload = json!({ "data": null, "errors": [{ "message": "Cannot query field" }] });
        match interpret_summary(payload.clone()) {
            Err(DashboardError::PartialQuery { messages, payload: kept }) => {
                assert_eq!(messages, vec!["Cannot query field".to_string()]);
                assert_eq!(kept, payload);
            }
            other => panic!("expected partial failure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_errors_array_is_success() {
        let summary = interpret_summary(json!({ "data": { "plans": [] }, "errors": [] })).unwrap();
        assert!(summary.plans.is_empty());
    }

    #[test]
    fn test_missing_plans_is_empty() {
        let summary = interpret_summary(json!({ "data": {} })).unwrap();
        assert!(summary.plans.is_empty());
        assert_eq!(summary.data, json!({}));
    }

    #[test]
    fn test_wrong_shape_is_decode_failure() {
        let result = interpret_summary(json!({ "data": { "plans": "nope" } }));
        assert!(matches!(result, Err(DashboardError::DecodeFailed(_))));
    }
}
