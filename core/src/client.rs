//! Stateless request builder and response parser for the usuarios API.
//!
//! # Design
//! `UserClient` holds only a `base_url` and an optional per-call timeout; it
//! carries no mutable state between calls, no cache of prior results, and no
//! connection pool. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, so status interpretation and decoding stay deterministic
//! and testable without a server.
//!
//! The `list_users` / `create_user` / `update_user` / `delete_user`
//! convenience methods run the full build → execute → parse round trip via
//! [`crate::transport`]. Callers needing cancellation pair the `build_*` /
//! `parse_*` halves with [`crate::transport::execute_cancellable`] instead.

use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport;
use crate::types::User;

/// Blocking, stateless client for the usuarios API.
///
/// Every operation is an independent round trip: no retries, no batching,
/// no ordering guarantees between concurrent calls.
#[derive(Debug, Clone)]
pub struct UserClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl UserClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Set the timeout stamped onto every request this client builds. The
    /// timeout covers the whole round trip of a single call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/usuarios/all", self.base_url),
            headers: Vec::new(),
            body: None,
            timeout: self.timeout,
        }
    }

    pub fn build_create_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(user).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/usuarios", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            timeout: self.timeout,
        })
    }

    pub fn build_update_user(&self, user: &User) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(user).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/usuarios/{}", self.base_url, user.id),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            timeout: self.timeout,
        })
    }

    pub fn build_delete_user(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/usuarios/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
            timeout: self.timeout,
        }
    }

    /// Decode the server's array in its own order — the client never
    /// re-sorts.
    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, &[200])?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// The server replies with the created record, id populated. Both 200
    /// and 201 are accepted.
    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, &[200, 201])?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// A successful update carries no body worth decoding; 200 is the only
    /// success signal.
    pub fn parse_update_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200])
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, &[200])
    }

    /// `GET {base}/usuarios/all` — every user, in server order.
    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let request = self.build_list_users();
        self.parse_list_users(transport::execute(&request)?)
    }

    /// `POST {base}/usuarios` — returns the stored record with its
    /// server-assigned id; the draft's sentinel id is ignored.
    pub fn create_user(&self, user: &User) -> Result<User, ApiError> {
        let request = self.build_create_user(user)?;
        self.parse_create_user(transport::execute(&request)?)
    }

    /// `PUT {base}/usuarios/{id}` — replaces the stored record wholesale.
    pub fn update_user(&self, user: &User) -> Result<(), ApiError> {
        let request = self.build_update_user(user)?;
        self.parse_update_user(transport::execute(&request)?)
    }

    /// `DELETE {base}/usuarios/{id}`.
    pub fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let request = self.build_delete_user(id);
        self.parse_delete_user(transport::execute(&request)?)
    }
}

/// Map non-expected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: &[u16]) -> Result<(), ApiError> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
