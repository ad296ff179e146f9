pub mod book;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryGateway;

pub use book::{EditState, RecordBook, ViewMode};
pub use config::{EditPolicy, MatchMode, PanelConfig};
pub use error::{ConfigError, EditError, SyncError};
pub use gateway::SyncGateway;
pub use models::{RecordSelector, UserDraft, UserField, UserPatch, UserRecord};
pub use session::RecordStore;
