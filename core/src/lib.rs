//! Blocking API client core for the usuarios service.
//!
//! # Overview
//! A `User` record with a fixed JSON wire format and a stateless client that
//! performs list/create/update/delete round trips against the `usuarios`
//! HTTP endpoints of a configured base URL.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url` and an optional
//!   per-call timeout.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit; the
//!   `transport` module is the bundled executor sitting between the two,
//!   and the `list_users`/`create_user`/`update_user`/`delete_user`
//!   convenience methods run the whole round trip.
//! - Every failure is surfaced to the caller immediately as an `ApiError`
//!   variant: no retries, no fallbacks, no partially applied mutations.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::UserClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::CancelHandle;
pub use types::User;
