//! Frontend Models
//!
//! Two independent shapes of the same planning data:
//! - flat records from the REST collections (snake_case)
//! - nested summary records from the aggregate query (camelCase)
//!
//! They are deliberately not unified.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ========================
// Flat REST records
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub id: i64,
    pub name: String,
    pub plan_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percent_complete: i64,
    pub bucket_id: i64,
    pub plan_id: i64,
}

// ========================
// Aggregate summary records
// ========================

/// Plan node of the aggregate hierarchy payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanNode {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buckets: Vec<BucketNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketNode {
    pub id: i64,
    pub name: String,
    pub plan_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tasks: Vec<TaskNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNode {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub percent_complete: i64,
    pub bucket_id: i64,
    pub plan_id: i64,
}

/// Absent and `null` both mean the default: an empty collection, a 0 percent
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Auth payloads
// ========================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<String>,
}

/// Device-code login flow. Everything beyond the two displayed fields is
/// opaque and echoed back to `/auth/complete` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceFlow {
    pub user_code: String,
    #[serde(default)]
    pub verification_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthCompletion {
    pub status: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
