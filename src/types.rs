//! Request and response values exchanged with a transport.
//!
//! Both types are plain data. An `ApiRequest` is constructed per call and
//! never persisted; an `ApiResponse` carries the raw body so that status
//! interpretation and JSON parsing stay with the caller.

use reqwest::{Method, StatusCode};
use serde_json::Value;

/// An HTTP request against the search index service, described as data.
///
/// The path is relative to the configured base URL and already includes any
/// query string.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Optional JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without a body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Create a request carrying a JSON body.
    pub fn with_body(method: Method, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// The raw outcome of an executed `ApiRequest`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_body() {
        let request = ApiRequest::new(Method::GET, "/movies");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/movies");
        assert!(request.body.is_none());
    }

    #[test]
    fn test_request_with_body() {
        let request = ApiRequest::with_body(Method::PUT, "/movies", json!({"settings": {}}));
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, Some(json!({"settings": {}})));
    }
}
