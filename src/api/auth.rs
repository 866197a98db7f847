//! Session Endpoints

use super::{decode, encode, Method, Transport};
use crate::error::Result;
use crate::models::{AuthCompletion, AuthStatus, DeviceFlow};

/// Detail the backend reports while the user has not finished signing in
pub const AUTHORIZATION_PENDING: &str = "authorization_pending";

/// Outcome of one `/auth/complete` attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginPoll {
    Succeeded(Option<String>),
    Pending,
    Failed(String),
}

impl From<AuthCompletion> for LoginPoll {
    fn from(completion: AuthCompletion) -> Self {
        match completion.status.as_str() {
            "success" => LoginPoll::Succeeded(completion.user),
            "error" => match completion.detail {
                Some(detail) if detail == AUTHORIZATION_PENDING => LoginPoll::Pending,
                Some(detail) => LoginPoll::Failed(detail),
                None => LoginPoll::Failed("unknown error".to_string()),
            },
            _ => LoginPoll::Pending,
        }
    }
}

pub async fn auth_status<T: Transport + ?Sized>(transport: &T) -> Result<AuthStatus> {
    let value = transport.request(Method::Get, "/auth/status", None).await?;
    decode(value)
}

pub async fn begin_login<T: Transport + ?Sized>(transport: &T) -> Result<DeviceFlow> {
    let value = transport.request(Method::Get, "/auth/login", None).await?;
    decode(value)
}

pub async fn complete_login<T: Transport + ?Sized>(transport: &T, flow: &DeviceFlow) -> Result<LoginPoll> {
    let value = transport
        .request(Method::Post, "/auth/complete", Some(encode(flow)?))
        .await?;
    decode::<AuthCompletion>(value).map(LoginPoll::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(status: &str, detail: Option<&str>) -> AuthCompletion {
        AuthCompletion {
            status: status.to_string(),
            user: Some("ana@example.org".to_string()),
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_completion_outcomes() {
        assert_eq!(
            LoginPoll::from(completion("success", None)),
            LoginPoll::Succeeded(Some("ana@example.org".to_string()))
        );
        assert_eq!(LoginPoll::from(completion("error", Some(AUTHORIZATION_PENDING))), LoginPoll::Pending);
        assert_eq!(
            LoginPoll::from(completion("error", Some("expired_token"))),
            LoginPoll::Failed("expired_token".to_string())
        );
        assert_eq!(LoginPoll::from(completion("pending", None)), LoginPoll::Pending);
    }
}
