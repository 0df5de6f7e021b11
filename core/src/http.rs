//! HTTP requests and responses as plain data.
//!
//! # Design
//! The core builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network — whoever executes the round trip (the
//! bundled [`crate::transport`] module, or a host bringing its own HTTP
//! stack) sits between the two. This separation keeps request construction
//! and status/body interpretation deterministic and testable without a
//! server.
//!
//! The per-call timeout travels on the request itself: `UserClient` stamps
//! its configured timeout onto every request it builds, and the executor
//! honours it. Executors without timeout support may ignore the field.

use std::time::Duration;

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `UserClient::build_*` methods. The executor is responsible for
/// performing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL, base URL already joined with the endpoint path.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Per-call timeout covering the whole round trip. `None` waits
    /// indefinitely.
    pub timeout: Option<Duration>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after performing an `HttpRequest`, then passed
/// to `UserClient::parse_*` methods for status interpretation and decoding.
/// Non-2xx statuses are data here, never transport errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
