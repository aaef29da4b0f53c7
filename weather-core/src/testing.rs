//! In-memory transport for exercising providers without the network.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::provider::{HttpReply, HttpTransport, TransportError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// Replies with the same canned result to every request and records each one.
#[derive(Debug)]
pub struct FakeTransport {
    reply: Result<HttpReply, TransportError>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply { status, body: body.to_string() }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self { reply: Err(TransportError(reason.to_string())), requests: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpReply, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        });
        self.reply.clone()
    }
}

pub const RAIN_BODY: &str = r#"{
    "name": "Bergen",
    "dt": 1700000000,
    "main": { "temp": 21.6, "humidity": 55 },
    "wind": { "speed": 5.0 },
    "weather": [ { "main": "Rain", "description": "light rain" } ]
}"#;
