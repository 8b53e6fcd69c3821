use serde::Serialize;
use serde_json::{Map, Value};

// Id/Skey pair taken from the inbound request headers.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    pub id: String,
    pub skey: String,
}

impl SessionCredentials {
    // Returns None when either half is absent or blank.
    pub fn new(id: Option<&str>, skey: Option<&str>) -> Option<Self> {
        let id = id.map(str::trim).filter(|value| !value.is_empty())?;
        let skey = skey.map(str::trim).filter(|value| !value.is_empty())?;
        Some(Self {
            id: id.to_string(),
            skey: skey.to_string(),
        })
    }
}

// Keep the skey out of logs and panic messages.
impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("id", &self.id)
            .field("skey", &"<redacted>")
            .finish()
    }
}

// Identity payload returned by the auth service for a valid session.
// The object is passed through untouched; only a few well-known fields get accessors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserInfo(Map<String, Value>);

impl UserInfo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.str_field("openId")
    }

    pub fn nick_name(&self) -> Option<&str> {
        self.str_field("nickName")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.str_field("avatarUrl")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}
