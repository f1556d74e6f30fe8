//! The invocation envelope: an optional body in, status/headers/body out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// An incoming request. Every other field of the host's event is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationEvent {
    #[serde(default)]
    pub body: Option<String>,
}

impl InvocationEvent {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

/// The outgoing response, serialized as `{ "statusCode", "headers", "body" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    /// A `text/plain` response.
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        let headers = BTreeMap::from([("Content-Type".to_string(), "text/plain".to_string())]);
        Self {
            status_code,
            headers,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}
