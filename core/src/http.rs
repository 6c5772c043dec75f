//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The envelope layer builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; a [`Transport`](crate::transport::Transport) executes the actual
//! round-trip. Every backend operation is a JSON `POST` to the tenant's
//! endpoint, so the method is implied rather than stored.

/// Content type sent with every envelope.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An HTTP `POST` described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpRequest {
    /// JSON `POST` to `url` carrying `body`.
    pub fn json_post(url: &str, body: String) -> Self {
        Self {
            url: url.to_string(),
            headers: vec![("content-type".to_string(), JSON_CONTENT_TYPE.to_string())],
            body,
        }
    }
}

/// An HTTP response described as plain data.
///
/// The status code is kept for logging only: the backend signals failures
/// inside the body, so parsing never branches on it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response with the given body, handy for scripted transports.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
