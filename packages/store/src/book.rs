//! # Record book: the panel's client-side state
//!
//! [`RecordBook`] holds everything the panel renders: the two record
//! partitions, the new-record draft, the edit state and the selected view. It
//! performs no I/O. Remote calls happen elsewhere (see [`crate::RecordStore`]
//! and the UI hooks); their results are committed here through the `apply_*`
//! methods, which log failures and leave the state untouched.
//!
//! ## Partitions
//!
//! | Partition | Filled by | Emptied by |
//! |-----------|-----------|------------|
//! | active | [`apply_loaded`](RecordBook::apply_loaded) (wholesale), [`apply_created`](RecordBook::apply_created), [`restore`](RecordBook::restore) | [`soft_delete`](RecordBook::soft_delete) |
//! | deleted | [`soft_delete`](RecordBook::soft_delete) | [`restore`](RecordBook::restore) |
//!
//! Soft-delete and restore are purely local: the deleted partition is never
//! sent to the service and is lost when the book is dropped.
//!
//! ## Edit state
//!
//! At most one row is in edit mode ([`EditState::Editing`]). What happens when
//! a second row is opened depends on [`EditPolicy`].

use crate::config::{EditPolicy, MatchMode, RecordsConfig};
use crate::error::{EditError, SyncError};
use crate::models::{RecordSelector, UserDraft, UserField, UserPatch, UserRecord};

/// Which partition is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Active,
    Deleted,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Active => "Users",
            ViewMode::Deleted => "Deleted Users",
        }
    }
}

/// Edit mode of the active table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: String, draft: UserDraft },
}

/// Client-side record state: partitions, drafts, edit target and view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordBook {
    active: Vec<UserRecord>,
    deleted: Vec<UserRecord>,
    new_draft: UserDraft,
    edit: EditState,
    view: ViewMode,
    match_mode: MatchMode,
    edit_policy: EditPolicy,
}

impl RecordBook {
    pub fn new(config: &RecordsConfig) -> Self {
        Self {
            match_mode: config.match_mode,
            edit_policy: config.edit_policy,
            ..Self::default()
        }
    }

    pub fn active(&self) -> &[UserRecord] {
        &self.active
    }

    pub fn deleted(&self) -> &[UserRecord] {
        &self.deleted
    }

    /// Records of the selected view.
    pub fn visible(&self) -> &[UserRecord] {
        match self.view {
            ViewMode::Active => &self.active,
            ViewMode::Deleted => &self.deleted,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Select the rendered partition. Touches no data.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }

    /// Selector soft-delete and restore should use for `record`.
    pub fn selector_for(&self, record: &UserRecord) -> RecordSelector {
        match self.match_mode {
            MatchMode::Id => RecordSelector::Id(record.id.clone()),
            MatchMode::Name => RecordSelector::Name(record.name.clone()),
        }
    }

    // --- Load ---

    /// Commit the result of a list call. Active is replaced wholesale;
    /// deleted is never touched.
    pub fn apply_loaded(&mut self, result: Result<Vec<UserRecord>, SyncError>) -> bool {
        match result {
            Ok(records) => {
                tracing::debug!("Loaded {} users", records.len());
                self.active = records;
                true
            }
            Err(e) => {
                tracing::error!("Error fetching users: {}", e);
                false
            }
        }
    }

    // --- Create ---

    pub fn new_draft(&self) -> &UserDraft {
        &self.new_draft
    }

    pub fn set_new_field(&mut self, field: UserField, value: impl Into<String>) {
        self.new_draft.set(field, value);
    }

    /// The draft to submit, if every required field is filled in.
    pub fn pending_create(&self) -> Option<UserDraft> {
        let missing = self.new_draft.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(
                "Not creating user, missing: {:?}",
                missing.iter().map(UserField::as_str).collect::<Vec<_>>()
            );
            return None;
        }
        Some(self.new_draft.clone())
    }

    /// Commit the result of a create call. On success the record is appended
    /// and the draft cleared; on failure the draft is kept for a retry.
    pub fn apply_created(&mut self, result: Result<UserRecord, SyncError>) -> bool {
        match result {
            Ok(record) => {
                tracing::info!("Created user {} ({})", record.name, record.id);
                self.active.push(record);
                self.new_draft = UserDraft::default();
                true
            }
            Err(e) => {
                tracing::error!("Error adding user: {}", e);
                false
            }
        }
    }

    // --- Soft delete / restore ---

    /// Move the first matching active record to the deleted partition.
    /// Returns `false` when nothing matched.
    pub fn soft_delete(&mut self, selector: &RecordSelector) -> bool {
        let Some(pos) = self.active.iter().position(|r| selector.matches(r)) else {
            tracing::debug!("Soft delete of {} matched nothing", selector);
            return false;
        };
        let record = self.active.remove(pos);
        if self.editing_id() == Some(record.id.as_str()) {
            self.edit = EditState::Idle;
        }
        tracing::debug!("Soft deleted user {} ({})", record.name, record.id);
        self.deleted.push(record);
        true
    }

    /// Move the first matching deleted record back to the end of active.
    pub fn restore(&mut self, selector: &RecordSelector) -> bool {
        let Some(pos) = self.deleted.iter().position(|r| selector.matches(r)) else {
            tracing::debug!("Restore of {} matched nothing", selector);
            return false;
        };
        let record = self.deleted.remove(pos);
        tracing::debug!("Restored user {} ({})", record.name, record.id);
        self.active.push(record);
        true
    }

    // --- Edit ---

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.edit {
            EditState::Editing { id, .. } => Some(id.as_str()),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn edit_draft(&self) -> Option<&UserDraft> {
        match &self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Put an active row into edit mode with a draft copied from it.
    pub fn start_edit(&mut self, record: &UserRecord) -> Result<(), EditError> {
        if !self.active.iter().any(|r| r.id == record.id) {
            return Err(EditError::NotActive {
                id: record.id.clone(),
            });
        }
        if let Some(current) = self.editing_id() {
            if current != record.id {
                match self.edit_policy {
                    EditPolicy::Exclusive => {
                        return Err(EditError::AlreadyEditing {
                            id: current.to_string(),
                        });
                    }
                    EditPolicy::DiscardOnSwitch => {
                        tracing::debug!("Discarding pending edit of {}", current);
                    }
                }
            }
        }
        self.edit = EditState::Editing {
            id: record.id.clone(),
            draft: record.to_draft(),
        };
        Ok(())
    }

    /// Update one field of the edit draft. Ignored when idle.
    pub fn set_edit_field(&mut self, field: UserField, value: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            draft.set(field, value);
        }
    }

    /// Leave edit mode and drop the draft.
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// Target id and body for saving the current edit.
    pub fn pending_edit(&self) -> Option<(String, UserPatch)> {
        match &self.edit {
            EditState::Editing { id, draft } => Some((id.clone(), UserPatch::from(draft.clone()))),
            EditState::Idle => None,
        }
    }

    /// Commit the result of an update call for `id`.
    ///
    /// On success the active copy is replaced and edit mode is left, but only
    /// if `id` is still the edit target. On failure nothing changes.
    pub fn apply_edited(&mut self, id: &str, result: Result<UserRecord, SyncError>) -> bool {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Error editing user: {}", e);
                return false;
            }
        };
        if self.is_editing(id) {
            self.edit = EditState::Idle;
        }
        match self.active.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                tracing::info!("Updated user {} ({})", record.name, id);
                *slot = record;
                true
            }
            None => {
                tracing::warn!("Updated user {} is no longer active, dropping response", id);
                false
            }
        }
    }
}
