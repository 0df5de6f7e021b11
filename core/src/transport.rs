//! Blocking executor for `HttpRequest` values, built on ureq.
//!
//! # Design
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data rather than `Err`, leaving status
//! interpretation to `UserClient::parse_*`. Only faults that prevent an HTTP
//! response from existing at all (DNS, refused connection, elapsed timeout)
//! map to `ApiError::Connection`.
//!
//! Each call builds its own agent: no connection reuse, no request queue,
//! no shared state between in-flight calls. Cancellation is cooperative —
//! [`CancelHandle`] is checked before the request is issued and again before
//! the response is handed back, but in-flight I/O is never aborted; a
//! cancelled caller is released and the response discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Cloneable cancellation token shared between a caller and the code
/// executing requests on its behalf.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the handle cancelled. Requests already on the wire run to
    /// completion; their responses are discarded.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Execute one request and return the response, whatever its status.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::debug!(method = ?request.method, url = %request.url, "issuing request");

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(request.timeout)
        .build()
        .new_agent();

    let result = match (&request.method, &request.body) {
        (HttpMethod::Get, _) => apply_headers(agent.get(&request.url), &request.headers).call(),
        (HttpMethod::Delete, _) => {
            apply_headers(agent.delete(&request.url), &request.headers).call()
        }
        (HttpMethod::Post, Some(body)) => {
            apply_headers(agent.post(&request.url), &request.headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => {
            apply_headers(agent.post(&request.url), &request.headers).send_empty()
        }
        (HttpMethod::Put, Some(body)) => {
            apply_headers(agent.put(&request.url), &request.headers).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => {
            apply_headers(agent.put(&request.url), &request.headers).send_empty()
        }
    };

    let mut response = result.map_err(|e| ApiError::Connection(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Connection(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Like [`execute`], but honours a [`CancelHandle`]: returns
/// `ApiError::Cancelled` if the handle was triggered before the request was
/// issued or while it was in flight.
pub fn execute_cancellable(
    request: &HttpRequest,
    cancel: &CancelHandle,
) -> Result<HttpResponse, ApiError> {
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    let response = execute(request)?;
    if cancel.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    Ok(response)
}

fn apply_headers<Any>(
    builder: ureq::RequestBuilder<Any>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<Any> {
    headers
        .iter()
        .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()))
}
