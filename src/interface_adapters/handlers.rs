use crate::domain::{LoginError, LoginErrorKind};
use crate::interface_adapters::protocol::{SessionResponse, error_body};
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::writer::BufferedResponse;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

// Handler that checks the caller's session and echoes the verified user.
pub async fn current_session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let mut response = BufferedResponse::default();

    match state.checker.check(&headers, &mut response).await {
        Ok(user_info) => Json(SessionResponse { user_info }).into_response(),
        Err(err) => {
            let body = response.take_body().unwrap_or_else(|| error_body(&err));
            (
                status_for(&err),
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
    }
}

// Maps login failures to HTTP statuses.
fn status_for(err: &LoginError) -> StatusCode {
    match err.kind() {
        LoginErrorKind::MissingCredentials
        | LoginErrorKind::InvalidCredentials
        | LoginErrorKind::InvalidSession => StatusCode::UNAUTHORIZED,
        LoginErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        LoginErrorKind::UpstreamError | LoginErrorKind::MalformedResponse => {
            StatusCode::BAD_GATEWAY
        }
    }
}
