//! # Panel configuration: `panel.toml`
//!
//! Tells the panel where the user service lives and how the record book
//! behaves. Every section is `#[serde(default)]`, so a missing or empty file is
//! equivalent to [`PanelConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [gateway]
//! base_url = "https://user-client-qmvw.onrender.com"   # empty = in-memory demo gateway
//!
//! [records]
//! match_mode = "id"                   # "id" | "name"
//! edit_policy = "discard_on_switch"   # "discard_on_switch" | "exclusive"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PanelConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`GatewayConfig`] | Base URL of the user service. |
//! | [`RecordsConfig`] | [`MatchMode`] for soft-delete/restore and the [`EditPolicy`] of the view controller. |

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Base URL of the hosted user service.
pub const DEFAULT_BASE_URL: &str = "https://user-client-qmvw.onrender.com";

/// Top-level configuration stored in `panel.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub records: RecordsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Service root without the `/api/...` path. Empty selects the in-memory gateway.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub edit_policy: EditPolicy,
}

/// How soft-delete and restore locate a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Id,
    /// First record with the same name. Known defect: records sharing a name
    /// can be moved in place of one another.
    Name,
}

/// What `start_edit` does while another row is being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// The pending edit is dropped without confirmation.
    #[default]
    DiscardOnSwitch,
    /// The new edit is rejected until the pending one is saved or cancelled.
    Exclusive,
}

impl PanelConfig {
    /// Create a config pointing at the given service.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            gateway: GatewayConfig {
                base_url: base_url.into(),
            },
            records: RecordsConfig::default(),
        }
    }

    /// Config for the in-memory gateway.
    pub fn offline() -> Self {
        Self::new("")
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.records.match_mode = mode;
        self
    }

    pub fn with_edit_policy(mut self, policy: EditPolicy) -> Self {
        self.records.edit_policy = policy;
        self
    }

    /// No remote service configured.
    pub fn is_offline(&self) -> bool {
        self.gateway.base_url.trim().is_empty()
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "panel.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
