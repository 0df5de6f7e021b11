//! Error types for the usuarios API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the user does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `HttpError` with the raw status code
//! and body for debugging. Transport faults (DNS, refused connection, elapsed
//! timeout) are collapsed into `Connection`; the underlying cause survives
//! only as text.

use std::fmt;

/// Errors returned by `UserClient` operations and the bundled transport.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response: DNS failure, refused
    /// connection, or an elapsed per-call timeout.
    Connection(String),

    /// The server returned 404 — the requested user does not exist.
    NotFound,

    /// The server returned a non-expected status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Encode(String),

    /// The caller's `CancelHandle` was triggered before the round trip
    /// completed.
    Cancelled,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connection(cause) => write!(f, "connection failed: {cause}"),
            ApiError::NotFound => write!(f, "user not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Decode(msg) => write!(f, "decode failed: {msg}"),
            ApiError::Encode(msg) => write!(f, "encode failed: {msg}"),
            ApiError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

impl std::error::Error for ApiError {}
