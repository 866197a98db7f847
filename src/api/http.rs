//! Fetch-backed transport

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::{json, Value};

use super::{Method, Transport};
use crate::config::ApiConfig;
use crate::error::{DashboardError, Result};

/// JSON-over-HTTP transport rooted at the resolved base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    config: ApiConfig,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    /// Send and return `(ok, status, body text)`
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<(bool, u16, String)> {
        let builder = self.builder(method, path);
        let response = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| DashboardError::EncodeFailed(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| DashboardError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| DashboardError::Transport(e.to_string()))?;
        Ok((response.ok(), response.status(), text))
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let (ok, status, text) = self.send(method, path, body.as_ref()).await?;
        if !ok {
            log::warn!("[HTTP] {:?} {} -> {}", method, path, status);
            return Err(DashboardError::RequestFailed(failure_message(status, &text)));
        }
        decode_body(&text)
    }

    async fn query(&self, document: &str, variables: Value) -> Result<Value> {
        let body = json!({ "query": document, "variables": variables });
        let (_, _, text) = self.send(Method::Post, "/graphql", Some(&body)).await?;
        decode_body(&text)
    }
}

/// Parse a success body. An empty body (e.g. 204) is JSON `null`.
pub fn decode_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| DashboardError::DecodeFailed(e.to_string()))
}

/// Human-readable message for a failed response: structured `detail`,
/// then `error`/`message`, then the raw text, then the status code.
pub fn failure_message(status: u16, text: &str) -> String {
    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        match body.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
        for key in ["error", "message"] {
            if let Some(Value::String(msg)) = body.get(key) {
                return msg.clone();
            }
        }
    }
    let raw = text.trim();
    if raw.is_empty() {
        format!("HTTP {}", status)
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_detail() {
        let body = r#"{"detail":"El plan asociado no existe."}"#;
        assert_eq!(failure_message(400, body), "El plan asociado no existe.");
    }

    #[test]
    fn test_failure_message_stringifies_structured_detail() {
        let body = r#"{"detail":[{"loc":["body","name"],"msg":"field required"}]}"#;
        let msg = failure_message(422, body);
        assert!(msg.contains("field required"));
    }

    #[test]
    fn test_failure_message_falls_back_to_error_then_raw_text() {
        assert_eq!(failure_message(500, r#"{"error":"boom"}"#), "boom");
        assert_eq!(failure_message(502, "Bad Gateway\n"), "Bad Gateway");
        assert_eq!(failure_message(503, ""), "HTTP 503");
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body(r#"{"ok":true}"#).unwrap(), json!({ "ok": true }));
        assert!(matches!(decode_body("<html>"), Err(DashboardError::DecodeFailed(_))));
    }
}
