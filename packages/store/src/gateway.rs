//! # Sync gateway: the remote side of the record store
//!
//! [`SyncGateway`] is the async seam between the panel's state and the user
//! service. It has exactly the three calls the service offers: list, create and
//! update. There is no delete call: soft-deleted records live only in
//! the client.
//!
//! Implementations:
//! - [`crate::MemoryGateway`]: in-process, for tests and the offline demo.
//! - `api::HttpGateway`: the REST client used in the browser.
//!
//! Futures are not `Send`; in the browser everything runs on one thread.

use crate::error::SyncError;
use crate::models::{UserDraft, UserPatch, UserRecord};

/// Async interface to the remote user service.
pub trait SyncGateway {
    /// Fetch every record, in server order.
    fn list(&self) -> impl std::future::Future<Output = Result<Vec<UserRecord>, SyncError>>;

    /// Create a record and return it with its assigned id.
    fn create(
        &self,
        draft: &UserDraft,
    ) -> impl std::future::Future<Output = Result<UserRecord, SyncError>>;

    /// Apply a partial update and return the stored record.
    fn update(
        &self,
        id: &str,
        patch: &UserPatch,
    ) -> impl std::future::Future<Output = Result<UserRecord, SyncError>>;
}
