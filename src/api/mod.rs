//! Backend Bindings
//!
//! Transport seam plus typed wrappers per endpoint, organized by domain.

mod http;
mod plans;
mod buckets;
mod tasks;
mod summary;
mod auth;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub use http::HttpTransport;
pub use plans::*;
pub use buckets::*;
pub use tasks::*;
pub use summary::*;
pub use auth::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Outbound calls to the planning backend.
///
/// `request` fails on non-2xx statuses. `query` only fails when the
/// transport itself fails or the body is not JSON; GraphQL-level errors
/// come back inside the decoded body for the caller to inspect.
#[async_trait(?Send)]
pub trait Transport {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value>;

    async fn query(&self, document: &str, variables: Value) -> Result<Value>;
}

/// Typed view of a decoded body
pub(crate) fn decode<D: serde::de::DeserializeOwned>(value: Value) -> Result<D> {
    serde_json::from_value(value).map_err(|e| crate::error::DashboardError::DecodeFailed(e.to_string()))
}

pub(crate) fn encode<S: serde::Serialize + ?Sized>(body: &S) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| crate::error::DashboardError::EncodeFailed(e.to_string()))
}
