use axum::http::{HeaderMap, HeaderName};
use tracing::field;

use crate::domain::{
    AuthApi, LoginError, LoginErrorKind, ResponseWriter, SessionCredentials, UserInfo,
};
use crate::interface_adapters::protocol::error_body;

// Header names the mini-program client SDK sends the session pair under.
pub const DEFAULT_ID_HEADER: &str = "x-wx-id";
pub const DEFAULT_SKEY_HEADER: &str = "x-wx-skey";

// Request headers carrying the session pair.
#[derive(Clone, Debug)]
pub struct CredentialHeaders {
    pub id: HeaderName,
    pub skey: HeaderName,
}

impl Default for CredentialHeaders {
    fn default() -> Self {
        Self {
            id: HeaderName::from_static(DEFAULT_ID_HEADER),
            skey: HeaderName::from_static(DEFAULT_SKEY_HEADER),
        }
    }
}

// Login check use case with injected dependencies.
pub struct LoginChecker<A> {
    pub auth: A,
    pub headers: CredentialHeaders,
}

impl<A> LoginChecker<A>
where
    A: AuthApi,
{
    pub fn new(auth: A) -> Self {
        Self {
            auth,
            headers: CredentialHeaders::default(),
        }
    }

    // Verifies the session carried by `request`. Every failure writes exactly one
    // JSON error body to `response`; success leaves `response` untouched.
    #[tracing::instrument(name = "check_login", skip_all, fields(session_id = field::Empty))]
    pub async fn check<W>(&self, request: &HeaderMap, response: &mut W) -> Result<UserInfo, LoginError>
    where
        W: ResponseWriter + ?Sized,
    {
        match self.verify(request).await {
            Ok(user) => {
                tracing::debug!("session check passed.");
                Ok(user)
            }
            Err(err) => {
                match err.kind() {
                    LoginErrorKind::MissingCredentials
                    | LoginErrorKind::InvalidCredentials
                    | LoginErrorKind::InvalidSession => {
                        tracing::warn!(kind = %err.kind(), error = %err.message(), "session rejected.");
                    }
                    LoginErrorKind::UpstreamError
                    | LoginErrorKind::Timeout
                    | LoginErrorKind::MalformedResponse => {
                        tracing::error!(kind = %err.kind(), error = %err.message(), "session check failed.");
                    }
                }
                response.write(error_body(&err));
                Err(err)
            }
        }
    }

    async fn verify(&self, request: &HeaderMap) -> Result<UserInfo, LoginError> {
        let credentials = self.read_credentials(request)?;
        tracing::Span::current().record("session_id", credentials.id.as_str());

        self.auth
            .check_session(&credentials)
            .await
            .map_err(LoginError::from)
    }

    fn read_credentials(&self, request: &HeaderMap) -> Result<SessionCredentials, LoginError> {
        let id = header_str(request, &self.headers.id);
        let skey = header_str(request, &self.headers.skey);

        SessionCredentials::new(id, skey).ok_or_else(|| {
            let missing = if id.is_none_or(|value| value.trim().is_empty()) {
                &self.headers.id
            } else {
                &self.headers.skey
            };
            LoginError::new(
                LoginErrorKind::MissingCredentials,
                format!("request header {missing} is missing"),
            )
        })
    }
}

// Non-UTF-8 header values are treated like absent ones.
fn header_str<'a>(request: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    request.get(name).and_then(|value| value.to_str().ok())
}
