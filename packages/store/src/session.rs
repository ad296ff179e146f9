//! # Record store: a panel session bound to a gateway
//!
//! [`RecordStore`] pairs a [`RecordBook`] with the [`SyncGateway`] it mirrors.
//! It is created when the panel opens ([`RecordStore::open`] loads once) and
//! dropped when it closes, taking the local deleted partition with it.
//!
//! Each remote operation awaits exactly one gateway call and then commits the
//! outcome to the book in one step, so no partial state is ever observable.
//!
//! This is the headless session API, used by tests and non-UI callers. The
//! Dioxus panel keeps its book in a signal instead, but runs the same steps:
//! [`RecordBook::pending_create`] / [`RecordBook::pending_edit`] before the
//! call, and the `apply_*` commits after it.
//!
//! | Method | Remote call | Local effect on success | On failure |
//! |--------|-------------|-------------------------|------------|
//! | [`load`](RecordStore::load) | list | active replaced | nothing |
//! | [`create`](RecordStore::create) | create | record appended, draft cleared | draft kept |
//! | [`edit`](RecordStore::edit) / [`save_edit`](RecordStore::save_edit) | update | record replaced, edit mode left | edit mode kept |
//! | [`soft_delete`](RecordStore::soft_delete) / [`restore`](RecordStore::restore) | none | record moved between partitions | n/a |

use crate::book::{RecordBook, ViewMode};
use crate::config::PanelConfig;
use crate::error::EditError;
use crate::gateway::SyncGateway;
use crate::models::{RecordSelector, UserDraft, UserPatch, UserRecord};

/// Record book plus the gateway it syncs with.
pub struct RecordStore<G: SyncGateway> {
    gateway: G,
    book: RecordBook,
}

impl<G: SyncGateway> RecordStore<G> {
    /// Create a store without contacting the gateway.
    pub fn new(gateway: G, config: &PanelConfig) -> Self {
        Self {
            gateway,
            book: RecordBook::new(&config.records),
        }
    }

    /// Create a store and load the active records once.
    pub async fn open(gateway: G, config: &PanelConfig) -> Self {
        let mut store = Self::new(gateway, config);
        store.load().await;
        store
    }

    pub fn book(&self) -> &RecordBook {
        &self.book
    }

    /// Direct access for draft and view updates.
    pub fn book_mut(&mut self) -> &mut RecordBook {
        &mut self.book
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Replace the active records with the gateway's list.
    pub async fn load(&mut self) -> bool {
        let result = self.gateway.list().await;
        self.book.apply_loaded(result)
    }

    /// Submit the current new-record draft.
    pub async fn create(&mut self) -> bool {
        let Some(draft) = self.book.pending_create() else {
            return false;
        };
        let result = self.gateway.create(&draft).await;
        self.book.apply_created(result)
    }

    /// Stage `draft` as the new-record draft and submit it.
    pub async fn create_from(&mut self, draft: UserDraft) -> bool {
        for field in crate::models::UserField::ALL {
            self.book.set_new_field(field, draft.get(field));
        }
        self.create().await
    }

    /// Send `patch` for `id` and commit the server's answer.
    pub async fn edit(&mut self, id: &str, patch: &UserPatch) -> bool {
        let result = self.gateway.update(id, patch).await;
        self.book.apply_edited(id, result)
    }

    /// Save the row currently in edit mode.
    pub async fn save_edit(&mut self) -> bool {
        let Some((id, patch)) = self.book.pending_edit() else {
            tracing::debug!("Save requested with no row in edit mode");
            return false;
        };
        self.edit(&id, &patch).await
    }

    pub fn soft_delete(&mut self, selector: &RecordSelector) -> bool {
        self.book.soft_delete(selector)
    }

    pub fn restore(&mut self, selector: &RecordSelector) -> bool {
        self.book.restore(selector)
    }

    pub fn start_edit(&mut self, record: &UserRecord) -> Result<(), EditError> {
        self.book.start_edit(record)
    }

    pub fn cancel_edit(&mut self) {
        self.book.cancel_edit();
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.book.set_view(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchMode;
    use crate::memory::MemoryGateway;
    use crate::models::UserField;

    fn name_mode() -> PanelConfig {
        PanelConfig::offline().with_match_mode(MatchMode::Name)
    }

    #[tokio::test]
    async fn test_open_loads_once() {
        let gateway = MemoryGateway::with_records(vec![
            UserRecord::new("1", "A", "a@x.com", "1"),
            UserRecord::new("2", "B", "b@x.com", "2"),
        ]);
        let store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;

        assert_eq!(store.book().active().len(), 2);
        assert_eq!(gateway.request_count(), 1);
    }

    #[tokio::test]
    async fn test_open_with_failing_gateway_starts_empty() {
        let gateway = MemoryGateway::new();
        gateway.set_offline(true);
        let store = RecordStore::open(gateway, &PanelConfig::offline()).await;
        assert!(store.book().active().is_empty());
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let mut store = RecordStore::open(MemoryGateway::new(), &PanelConfig::offline()).await;

        assert!(store.create_from(UserDraft::new("A", "a@x.com", "1")).await);
        assert_eq!(
            store.book().active(),
            &[UserRecord::new("1", "A", "a@x.com", "1")]
        );
        assert!(store.book().new_draft().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_keeps_draft_for_retry() {
        let gateway = MemoryGateway::new();
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;
        store.book_mut().set_new_field(UserField::Name, "A");
        store.book_mut().set_new_field(UserField::Email, "a@x.com");
        store.book_mut().set_new_field(UserField::Mobile, "1");

        gateway.fail_next(1);
        assert!(!store.create().await);
        assert!(store.book().active().is_empty());
        assert_eq!(store.book().new_draft(), &UserDraft::new("A", "a@x.com", "1"));

        assert!(store.create().await);
        assert_eq!(store.book().active().len(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_draft_never_reaches_gateway() {
        let gateway = MemoryGateway::new();
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;
        store.book_mut().set_new_field(UserField::Name, "A");

        assert!(!store.create().await);
        assert_eq!(gateway.request_count(), 1);
    }

    #[tokio::test]
    async fn test_staged_commit_matches_store_create() {
        let config = PanelConfig::offline();
        let mut store = RecordStore::open(MemoryGateway::new(), &config).await;
        assert!(store.create_from(UserDraft::new("A", "a@x.com", "1")).await);

        // The same steps driven by hand, as the UI panel does around its await.
        let gateway = MemoryGateway::new();
        let mut book = RecordBook::new(&config.records);
        book.apply_loaded(gateway.list().await);
        for field in UserField::ALL {
            book.set_new_field(field, UserDraft::new("A", "a@x.com", "1").get(field));
        }
        let draft = book.pending_create().unwrap();
        assert!(book.apply_created(gateway.create(&draft).await));

        assert_eq!(book.active(), store.book().active());
        assert_eq!(book.new_draft(), store.book().new_draft());
    }

    #[tokio::test]
    async fn test_whitespace_fields_reach_gateway() {
        let gateway = MemoryGateway::new();
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;

        assert!(store.create_from(UserDraft::new(" ", "a@x.com", "1")).await);
        assert_eq!(gateway.request_count(), 2);
        assert_eq!(gateway.records()[0].name, " ");
        assert_eq!(store.book().active().len(), 1);
    }

    #[tokio::test]
    async fn test_soft_delete_is_local_and_not_persisted() {
        let gateway = MemoryGateway::with_records(vec![UserRecord::new("1", "A", "a@x.com", "1")]);
        let mut store = RecordStore::open(gateway.clone(), &name_mode()).await;

        assert!(store.soft_delete(&RecordSelector::Name("A".into())));
        assert!(store.book().active().is_empty());
        assert_eq!(gateway.request_count(), 1);
        assert_eq!(gateway.records().len(), 1);

        // A fresh session sees the record as active again.
        let reopened = RecordStore::open(gateway, &name_mode()).await;
        assert_eq!(reopened.book().active().len(), 1);
        assert!(reopened.book().deleted().is_empty());
    }

    #[tokio::test]
    async fn test_soft_delete_then_restore_round_trip() {
        let record = UserRecord::new("1", "A", "a@x.com", "1");
        let gateway = MemoryGateway::with_records(vec![record.clone()]);
        let mut store = RecordStore::open(gateway, &name_mode()).await;

        store.soft_delete(&RecordSelector::Name("A".into()));
        assert_eq!(store.book().deleted(), &[record.clone()]);

        assert!(store.restore(&RecordSelector::Name("A".into())));
        assert_eq!(store.book().active(), &[record]);
        assert!(store.book().deleted().is_empty());
    }

    #[tokio::test]
    async fn test_edit_success() {
        let gateway = MemoryGateway::with_records(vec![UserRecord::new("1", "A", "a@x.com", "1")]);
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;
        let record = store.book().active()[0].clone();

        store.start_edit(&record).unwrap();
        store.book_mut().set_edit_field(UserField::Mobile, "999");
        assert!(store.save_edit().await);

        assert_eq!(store.book().active()[0].mobile, "999");
        assert!(store.book().editing_id().is_none());
        assert_eq!(gateway.records()[0].mobile, "999");
    }

    #[tokio::test]
    async fn test_edit_failure_scenario() {
        let gateway = MemoryGateway::with_records(vec![UserRecord::new("1", "A", "a@x.com", "1")]);
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;
        let record = store.book().active()[0].clone();
        store.start_edit(&record).unwrap();

        gateway.fail_next(1);
        assert!(!store.edit("1", &UserPatch::name("B")).await);
        assert_eq!(store.book().active(), &[record]);
        assert_eq!(store.book().editing_id(), Some("1"));
    }

    #[tokio::test]
    async fn test_reload_keeps_deleted_partition() {
        let gateway = MemoryGateway::with_records(vec![
            UserRecord::new("1", "A", "a@x.com", "1"),
            UserRecord::new("2", "B", "b@x.com", "2"),
        ]);
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;
        store.soft_delete(&RecordSelector::Id("1".into()));

        assert!(store.load().await);
        assert_eq!(store.book().active(), gateway.records().as_slice());
        assert_eq!(store.book().deleted().len(), 1);
    }

    #[tokio::test]
    async fn test_save_without_edit_is_noop() {
        let gateway = MemoryGateway::new();
        let mut store = RecordStore::open(gateway.clone(), &PanelConfig::offline()).await;
        assert!(!store.save_edit().await);
        assert_eq!(gateway.request_count(), 1);
    }

    #[tokio::test]
    async fn test_view_switch() {
        let mut store = RecordStore::new(MemoryGateway::new(), &PanelConfig::offline());
        store.set_view(ViewMode::Deleted);
        assert_eq!(store.book().view(), ViewMode::Deleted);
        store.cancel_edit();
        assert_eq!(store.gateway().request_count(), 0);
    }
}
