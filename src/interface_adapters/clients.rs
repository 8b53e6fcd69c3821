use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::domain::{AuthApi, AuthApiError, SessionCredentials, UserInfo};
use crate::interface_adapters::protocol::{AuthRequest, AuthResponse};

// Thin reqwest client for the remote session check.
#[derive(Clone)]
pub struct AuthClient {
    http: Client,
    auth_url: Url,
}

impl AuthClient {
    pub fn new(auth_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, auth_url })
    }

    pub fn auth_url(&self) -> &Url {
        &self.auth_url
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn check_session(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<UserInfo, AuthApiError> {
        let res = self
            .http
            .post(self.auth_url.clone())
            .json(&AuthRequest::check_session(credentials))
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = res.status();

        if !status.is_success() {
            return Err(AuthApiError::Upstream {
                status: status.as_u16(),
            });
        }

        // Read the raw body first so a slow body still counts as a timeout.
        let body = res.bytes().await.map_err(map_transport_error)?;
        let envelope: AuthResponse = serde_json::from_slice(&body)
            .map_err(|err| AuthApiError::Malformed(err.to_string()))?;

        if envelope.return_code != 0 {
            return Err(AuthApiError::Rejected {
                code: envelope.return_code,
                message: envelope.return_message,
            });
        }

        envelope
            .user_info()
            .ok_or_else(|| AuthApiError::Malformed("returnData.user_info is missing".to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> AuthApiError {
    if err.is_timeout() {
        AuthApiError::Timeout
    } else {
        AuthApiError::Transport(err.to_string())
    }
}
