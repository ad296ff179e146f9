use thiserror::Error;

/// Failure talking to the remote user service.
///
/// Every variant is a flavour of "network or server error"; the panel treats
/// them alike (log, abandon the operation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl SyncError {
    /// The request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_))
    }
}

/// Rejected edit-mode transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("record {id} is already being edited")]
    AlreadyEditing { id: String },
    #[error("record {id} is not in the active set")]
    NotActive { id: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid panel config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise panel config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
