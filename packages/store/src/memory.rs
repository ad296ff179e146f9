use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::SyncError;
use crate::gateway::SyncGateway;
use crate::models::{UserDraft, UserPatch, UserRecord};

/// In-memory SyncGateway for testing and the offline demo.
///
/// Ids are assigned sequentially, after the largest numeric id seeded. Failures can be injected
/// with [`set_offline`](MemoryGateway::set_offline) and
/// [`fail_next`](MemoryGateway::fail_next).
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    records: Vec<UserRecord>,
    next_id: u64,
    offline: bool,
    fail_next: usize,
    requests: usize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records already on the "server".
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let gateway = Self::new();
        {
            let mut state = gateway.state();
            state.next_id = records
                .iter()
                .filter_map(|r| r.id.parse::<u64>().ok())
                .max()
                .unwrap_or(0);
            state.records = records;
        }
        gateway
    }

    /// While offline every call fails with a transport error.
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Make the next `count` calls fail with a 500.
    pub fn fail_next(&self, count: usize) {
        self.state().fail_next = count;
    }

    /// Number of calls received, failed ones included.
    pub fn request_count(&self) -> usize {
        self.state().requests
    }

    /// Snapshot of the server-side records.
    pub fn records(&self) -> Vec<UserRecord> {
        self.state().records.clone()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn begin(&self) -> Result<MutexGuard<'_, State>, SyncError> {
        let mut state = self.state();
        state.requests += 1;
        if state.offline {
            return Err(SyncError::Transport("gateway is offline".to_string()));
        }
        if state.fail_next > 0 {
            state.fail_next -= 1;
            return Err(SyncError::Status {
                status: 500,
                body: "injected failure".to_string(),
            });
        }
        Ok(state)
    }
}

impl SyncGateway for MemoryGateway {
    async fn list(&self) -> Result<Vec<UserRecord>, SyncError> {
        let state = self.begin()?;
        Ok(state.records.clone())
    }

    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, SyncError> {
        let mut state = self.begin()?;
        state.next_id += 1;
        let record = UserRecord {
            id: state.next_id.to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            mobile: draft.mobile.clone(),
        };
        state.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, SyncError> {
        let mut state = self.begin()?;
        let Some(slot) = state.records.iter_mut().find(|r| r.id == id) else {
            return Err(SyncError::Status {
                status: 404,
                body: format!("no user with id {id}"),
            });
        };
        *slot = slot.patched(patch);
        Ok(slot.clone())
    }
}
