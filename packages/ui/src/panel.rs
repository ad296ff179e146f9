//! Record store context and hooks for the UI.

use dioxus::prelude::*;
use store::{PanelConfig, RecordBook, SyncGateway, UserField, UserRecord, ViewMode};

use crate::gateway::{make_gateway, PanelGateway};

/// Handle to the panel's record book and gateway.
///
/// Cheap to copy into event handlers. Remote operations run in a spawned task
/// and commit to the book after their single await; local operations apply
/// immediately. The staging and commit steps are the ones
/// `store::RecordStore` uses.
#[derive(Clone, Copy, PartialEq)]
pub struct UserPanel {
    book: Signal<RecordBook>,
    gateway: Signal<PanelGateway>,
}

impl UserPanel {
    pub fn book(&self) -> Signal<RecordBook> {
        self.book
    }

    /// Replace the active records with the service's list.
    pub async fn load(self) {
        let gateway = PanelGateway::clone(&self.gateway.peek());
        let result = gateway.list().await;
        let mut book = self.book;
        book.write().apply_loaded(result);
    }

    /// Submit the new-record draft if it is complete.
    pub fn create(self) {
        let Some(draft) = self.book.peek().pending_create() else {
            return;
        };
        spawn(async move {
            let gateway = PanelGateway::clone(&self.gateway.peek());
            let result = gateway.create(&draft).await;
            let mut book = self.book;
            book.write().apply_created(result);
        });
    }

    /// Save the row in edit mode.
    pub fn save_edit(self) {
        let Some((id, patch)) = self.book.peek().pending_edit() else {
            return;
        };
        spawn(async move {
            let gateway = PanelGateway::clone(&self.gateway.peek());
            let result = gateway.update(&id, &patch).await;
            let mut book = self.book;
            book.write().apply_edited(&id, result);
        });
    }

    pub fn soft_delete(self, record: &UserRecord) {
        let mut book = self.book;
        let selector = book.peek().selector_for(record);
        book.write().soft_delete(&selector);
    }

    pub fn restore(self, record: &UserRecord) {
        let mut book = self.book;
        let selector = book.peek().selector_for(record);
        book.write().restore(&selector);
    }

    pub fn start_edit(self, record: &UserRecord) {
        let mut book = self.book;
        if let Err(e) = book.write().start_edit(record) {
            tracing::warn!("Cannot edit {}: {}", record.id, e);
        };
    }

    pub fn cancel_edit(self) {
        let mut book = self.book;
        book.write().cancel_edit();
    }

    pub fn set_view(self, view: ViewMode) {
        let mut book = self.book;
        book.write().set_view(view);
    }

    pub fn set_new_field(self, field: UserField, value: String) {
        let mut book = self.book;
        book.write().set_new_field(field, value);
    }

    pub fn set_edit_field(self, field: UserField, value: String) {
        let mut book = self.book;
        book.write().set_edit_field(field, value);
    }
}

/// Get the panel handle provided by [`UserPanelProvider`].
pub fn use_user_panel() -> UserPanel {
    use_context::<UserPanel>()
}

/// Provider component that owns the panel session.
/// The record book lives as long as this component is mounted; records are
/// loaded once on mount.
#[component]
pub fn UserPanelProvider(config: PanelConfig, children: Element) -> Element {
    let book = use_signal(|| RecordBook::new(&config.records));
    let gateway = use_signal(|| make_gateway(&config));
    let panel = use_context_provider(|| UserPanel { book, gateway });

    // Fetch the users on mount
    let _loader = use_resource(move || async move {
        panel.load().await;
    });

    rsx! {
        {children}
    }
}
