//! API Configuration
//!
//! Where backend calls go and how often the login poll runs.

use crate::error::{DashboardError, Result};

/// Backend address used when the page is served from a development host
pub const LOCAL_BACKEND_URL: &str = "http://localhost:8000";

/// Interval between `/auth/complete` attempts
pub const AUTH_POLL_INTERVAL_MS: u32 = 5_000;

const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub auth_poll_interval_ms: u32,
}

impl ApiConfig {
    /// Local hosts talk to the fixed development backend; anything else
    /// talks to the origin that served the page (reverse-proxy deployment).
    pub fn resolve(hostname: &str, origin: &str) -> Self {
        let hostname = hostname.to_lowercase();
        let base_url = if LOCAL_HOSTS.contains(&hostname.as_str()) {
            LOCAL_BACKEND_URL.to_string()
        } else {
            origin.trim_end_matches('/').to_string()
        };
        Self {
            base_url,
            auth_poll_interval_ms: AUTH_POLL_INTERVAL_MS,
        }
    }

    /// Resolve from `window.location`
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| DashboardError::Transport("no window".to_string()))?;
        let location = window.location();
        let hostname = location
            .hostname()
            .map_err(|e| DashboardError::Transport(format!("no hostname: {:?}", e)))?;
        let origin = location
            .origin()
            .map_err(|e| DashboardError::Transport(format!("no origin: {:?}", e)))?;
        Ok(Self::resolve(&hostname, &origin))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_targets_dev_backend() {
        let config = ApiConfig::resolve("localhost", "http://localhost:8080");
        assert_eq!(config.base_url, LOCAL_BACKEND_URL);
        assert_eq!(config.url("/plans"), "http://localhost:8000/plans");
    }

    #[test]
    fn test_loopback_ip_is_local_too() {
        let config = ApiConfig::resolve("127.0.0.1", "http://127.0.0.1:5173");
        assert_eq!(config.base_url, LOCAL_BACKEND_URL);
    }

    #[test]
    fn test_deployed_host_uses_page_origin() {
        let config = ApiConfig::resolve("planner.example.org", "https://planner.example.org/");
        assert_eq!(config.base_url, "https://planner.example.org");
        assert_eq!(config.url("/graphql"), "https://planner.example.org/graphql");
        assert_eq!(config.auth_poll_interval_ms, AUTH_POLL_INTERVAL_MS);
    }
}
