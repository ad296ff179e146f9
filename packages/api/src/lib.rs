//! # API crate: REST client for the user service
//!
//! Implements [`store::SyncGateway`] over HTTP so the panel can list, create and
//! update user records on the hosted service.
//!
//! ## Endpoints
//!
//! | Gateway call | Request | Response |
//! |--------------|---------|----------|
//! | `list` | `GET {base}/api/users/getuser` | JSON array of records |
//! | `create` | `POST {base}/api/users/adduser` with `{name, email, mobile}` | the created record |
//! | `update` | `PATCH {base}/api/users/getuser/{id}` with a partial record | the updated record |
//!
//! There is no delete endpoint; soft-deleted records never leave the client.
//!
//! ## Errors
//!
//! Transport failures, non-2xx statuses and undecodable bodies all surface as
//! [`store::SyncError`]. A malformed base URL is rejected up front by
//! [`HttpGateway::new`] with an [`ApiError`].

mod error;
mod http;

pub use error::ApiError;
pub use http::HttpGateway;

pub use store::{SyncError, SyncGateway, UserDraft, UserPatch, UserRecord};
