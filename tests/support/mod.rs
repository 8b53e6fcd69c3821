// Fake authorization endpoint shared by the integration tests.
use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};
use weapp_session::domain::ResponseWriter;

// How long the fake endpoint stalls for `expect-timeout`.
pub const STALL: Duration = Duration::from_secs(2);

static AUTH_URL: OnceLock<String> = OnceLock::new();
static AUTH_READY: OnceLock<()> = OnceLock::new();

// Ensure the fake auth server is running and return its endpoint URL.
pub fn ensure_auth_server() -> &'static str {
    AUTH_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // Own runtime so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}/mina_auth/"));
                let app = Router::new().route("/mina_auth/", post(fake_auth));
                axum::serve(listener, app).await.expect("fake auth server failed");
            });
        });
        wait_for_url_and_readiness(published_url);
    });

    AUTH_URL
        .get()
        .expect("auth url should be initialized")
        .as_str()
}

fn wait_for_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let auth_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };
    let _ = AUTH_URL.set(auth_url.clone());

    let addr = auth_url
        .strip_prefix("http://")
        .and_then(|rest| rest.split('/').next())
        .expect("auth url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("fake auth server did not become ready in time");
}

fn envelope(code: i64, message: &str, data: Value) -> Response {
    Json(json!({
        "returnCode": code,
        "returnMessage": message,
        "returnData": data
    }))
    .into_response()
}

// Outcome is chosen by the id/skey pair, mirroring the real endpoint's cases.
async fn fake_auth(Json(body): Json<Value>) -> Response {
    let para = &body["interface"]["para"];
    let id = para["id"].as_str().unwrap_or_default();
    let skey = para["skey"].as_str().unwrap_or_default();

    if body["interface"]["interfaceName"] != "qcloud.cam.auth" {
        return envelope(-1, "unknown interface", Value::Null);
    }

    match (id, skey) {
        ("expect-60011", _) => envelope(60011, "skey expired", Value::Null),
        ("expect-60012", _) => envelope(60012, "wx session failed", Value::Null),
        ("expect-invalid-json", _) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{invalid json",
        )
            .into_response(),
        ("expect-500", _) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        ("expect-timeout", _) => {
            tokio::time::sleep(STALL).await;
            envelope(0, "OK", Value::Null)
        }
        ("expect-no-user-info", _) => envelope(0, "OK", json!({})),
        ("valid-id", "valid-key") => envelope(
            0,
            "OK",
            json!({
                "id": "valid-id",
                "skey": "valid-key",
                "user_info": {
                    "openId": "valid-open-id",
                    "nickName": "Pilot",
                    "avatarUrl": "https://example.com/avatar.png"
                }
            }),
        ),
        _ => envelope(60021, "invalid id or skey", Value::Null),
    }
}

#[derive(Default)]
pub struct RecordingWriter {
    pub bodies: Vec<String>,
}

impl ResponseWriter for RecordingWriter {
    fn write(&mut self, body: String) {
        self.bodies.push(body);
    }
}
