use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::{LoginError, SessionCredentials, UserInfo};

// Key the client SDK looks for to recognize login-layer error bodies.
pub const WX_SESSION_MAGIC_ID: &str = "F2C224D4-2BCE-4C64-AF9F-A6D872000D1A";

const AUTH_PROTOCOL_VERSION: u32 = 1;
const AUTH_COMPONENT_NAME: &str = "MA";
const CHECK_SESSION_INTERFACE: &str = "qcloud.cam.auth";

// Request envelope sent to the authorization endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest<'a> {
    version: u32,
    component_name: &'static str,
    interface: AuthInterface<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthInterface<'a> {
    interface_name: &'static str,
    para: CheckSessionPara<'a>,
}

#[derive(Debug, Serialize)]
struct CheckSessionPara<'a> {
    id: &'a str,
    skey: &'a str,
}

impl<'a> AuthRequest<'a> {
    pub fn check_session(credentials: &'a SessionCredentials) -> Self {
        Self {
            version: AUTH_PROTOCOL_VERSION,
            component_name: AUTH_COMPONENT_NAME,
            interface: AuthInterface {
                interface_name: CHECK_SESSION_INTERFACE,
                para: CheckSessionPara {
                    id: &credentials.id,
                    skey: &credentials.skey,
                },
            },
        }
    }
}

// Response envelope returned by the authorization endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub return_code: i64,
    #[serde(default)]
    pub return_message: String,
    #[serde(default)]
    pub return_data: Option<Value>,
}

impl AuthResponse {
    // Pulls `returnData.user_info` out of a successful envelope.
    pub fn user_info(self) -> Option<UserInfo> {
        match self.return_data?.get_mut("user_info")?.take() {
            Value::Object(fields) => Some(UserInfo::new(fields)),
            _ => None,
        }
    }
}

// Success body served by the demo session route.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_info: UserInfo,
}

// Diagnostic body written to the response when the login check fails.
pub fn error_body(err: &LoginError) -> String {
    let mut body = Map::new();
    body.insert(WX_SESSION_MAGIC_ID.to_string(), json!(1));
    body.insert("error".to_string(), json!(err.error_code()));
    body.insert("message".to_string(), json!(err.message()));
    Value::Object(body).to_string()
}
