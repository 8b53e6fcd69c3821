use std::{env, time::Duration};

// Runtime configuration read from the environment (after `.env` is loaded).

pub fn http_port() -> u16 {
    env::var("HTTP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn auth_service_url() -> String {
    env::var("AUTH_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:5757/mina_auth/".to_string())
}

pub fn auth_check_timeout() -> Duration {
    let millis = env::var("AUTH_CHECK_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(3000);
    Duration::from_millis(millis)
}

pub fn id_header() -> String {
    env::var("SESSION_ID_HEADER").unwrap_or_else(|_| "X-WX-Id".to_string())
}

pub fn skey_header() -> String {
    env::var("SESSION_SKEY_HEADER").unwrap_or_else(|_| "X-WX-Skey".to_string())
}
