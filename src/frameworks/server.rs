// Framework bootstrap for the session check host.

use crate::domain::AuthApi;
use crate::frameworks::config;
use crate::interface_adapters::clients::AuthClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{CredentialHeaders, LoginChecker};

use axum::http::HeaderName;
use std::io::{Error, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use url::Url;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state().inspect_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
    })?;

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

fn build_state() -> Result<Arc<AppState>> {
    let auth_url = Url::parse(&config::auth_service_url())
        .map_err(|e| Error::other(format!("invalid AUTH_SERVICE_URL: {e}")))?;
    let auth_check_timeout = config::auth_check_timeout();
    let auth_client = AuthClient::new(auth_url, auth_check_timeout)
        .map_err(|e| Error::other(format!("failed to initialize auth client: {e}")))?;
    tracing::debug!(
        auth_url = %auth_client.auth_url(),
        auth_check_timeout_ms = auth_check_timeout.as_millis(),
        "auth client configured"
    );

    let headers = CredentialHeaders {
        id: parse_header_name(&config::id_header())?,
        skey: parse_header_name(&config::skey_header())?,
    };

    let auth: Arc<dyn AuthApi> = Arc::new(auth_client);
    Ok(Arc::new(AppState {
        checker: LoginChecker { auth, headers },
    }))
}

fn parse_header_name(name: &str) -> Result<HeaderName> {
    HeaderName::try_from(name)
        .map_err(|e| Error::other(format!("invalid session header name {name:?}: {e}")))
}
