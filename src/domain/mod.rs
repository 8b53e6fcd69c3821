mod errors;
mod ports;
mod session;

// Re-export the domain boundary types and ports.
pub use errors::{
    AuthApiError, ERR_CHECK_LOGIN_FAILED, ERR_INVALID_SESSION, LoginError, LoginErrorKind,
    RETURN_CODE_SKEY_EXPIRED, RETURN_CODE_WX_SESSION_FAILED,
};
pub use ports::{AuthApi, ResponseWriter};
pub use session::{SessionCredentials, UserInfo};
