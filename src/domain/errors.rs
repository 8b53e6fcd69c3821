use std::fmt;

// Upstream return codes that mean the session itself is no longer valid.
pub const RETURN_CODE_SKEY_EXPIRED: i64 = 60011;
pub const RETURN_CODE_WX_SESSION_FAILED: i64 = 60012;

// Error codes reported to the client in the JSON error body.
pub const ERR_INVALID_SESSION: &str = "ERR_INVALID_SESSION";
pub const ERR_CHECK_LOGIN_FAILED: &str = "ERR_CHECK_LOGIN_FAILED";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginErrorKind {
    MissingCredentials,
    InvalidCredentials,
    InvalidSession,
    UpstreamError,
    Timeout,
    MalformedResponse,
}

impl LoginErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginErrorKind::MissingCredentials => "missing credentials",
            LoginErrorKind::InvalidCredentials => "invalid credentials",
            LoginErrorKind::InvalidSession => "invalid session",
            LoginErrorKind::UpstreamError => "upstream error",
            LoginErrorKind::Timeout => "timeout",
            LoginErrorKind::MalformedResponse => "malformed response",
        }
    }
}

impl fmt::Display for LoginErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Single error type surfaced by the login check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginError {
    kind: LoginErrorKind,
    message: String,
}

impl LoginError {
    pub fn new(kind: LoginErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> LoginErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Callers branch on this to decide whether the client must log in again.
    pub fn is_invalid_session(&self) -> bool {
        self.kind == LoginErrorKind::InvalidSession
    }

    pub fn error_code(&self) -> &'static str {
        if self.is_invalid_session() {
            ERR_INVALID_SESSION
        } else {
            ERR_CHECK_LOGIN_FAILED
        }
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for LoginError {}

// Failures reported by the auth API port.
#[derive(Debug)]
pub enum AuthApiError {
    Timeout,
    Transport(String),
    Upstream { status: u16 },
    Malformed(String),
    Rejected { code: i64, message: String },
}

impl fmt::Display for AuthApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthApiError::Timeout => write!(f, "auth request timed out"),
            AuthApiError::Transport(err) => write!(f, "auth transport error: {err}"),
            AuthApiError::Upstream { status } => write!(f, "auth upstream error {status}"),
            AuthApiError::Malformed(err) => write!(f, "auth response decode error: {err}"),
            AuthApiError::Rejected { code, message } => {
                write!(f, "auth rejected session ({code}): {message}")
            }
        }
    }
}

impl std::error::Error for AuthApiError {}

impl From<AuthApiError> for LoginError {
    fn from(err: AuthApiError) -> Self {
        let kind = match &err {
            AuthApiError::Timeout => LoginErrorKind::Timeout,
            AuthApiError::Transport(_) | AuthApiError::Upstream { .. } => {
                LoginErrorKind::UpstreamError
            }
            AuthApiError::Malformed(_) => LoginErrorKind::MalformedResponse,
            AuthApiError::Rejected { code, .. }
                if matches!(*code, RETURN_CODE_SKEY_EXPIRED | RETURN_CODE_WX_SESSION_FAILED) =>
            {
                LoginErrorKind::InvalidSession
            }
            AuthApiError::Rejected { .. } => LoginErrorKind::InvalidCredentials,
        };
        LoginError::new(kind, err.to_string())
    }
}
