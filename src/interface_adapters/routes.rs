use crate::interface_adapters::handlers::current_session;
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/session", get(current_session))
        .with_state(state)
}
