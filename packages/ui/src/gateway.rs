//! Gateway constructor for the panel.
//!
//! Returns a [`PanelGateway`] for the configured service:
//! - **Base URL set**: REST client via [`api::HttpGateway`]
//! - **Base URL empty** (or unparsable): in-memory [`store::MemoryGateway`]

use api::HttpGateway;
use store::{MemoryGateway, PanelConfig, SyncError, SyncGateway, UserDraft, UserPatch, UserRecord};

/// The gateway variants the panel can run against.
#[derive(Clone, Debug)]
pub enum PanelGateway {
    Http(HttpGateway),
    Memory(MemoryGateway),
}

impl PanelGateway {
    pub fn is_remote(&self) -> bool {
        matches!(self, PanelGateway::Http(_))
    }
}

impl SyncGateway for PanelGateway {
    async fn list(&self) -> Result<Vec<UserRecord>, SyncError> {
        match self {
            PanelGateway::Http(g) => g.list().await,
            PanelGateway::Memory(g) => g.list().await,
        }
    }

    async fn create(&self, draft: &UserDraft) -> Result<UserRecord, SyncError> {
        match self {
            PanelGateway::Http(g) => g.create(draft).await,
            PanelGateway::Memory(g) => g.create(draft).await,
        }
    }

    async fn update(&self, id: &str, patch: &UserPatch) -> Result<UserRecord, SyncError> {
        match self {
            PanelGateway::Http(g) => g.update(id, patch).await,
            PanelGateway::Memory(g) => g.update(id, patch).await,
        }
    }
}

/// Create the gateway described by `config`.
pub fn make_gateway(config: &PanelConfig) -> PanelGateway {
    if config.is_offline() {
        tracing::info!("No user service configured, using in-memory gateway");
        return PanelGateway::Memory(MemoryGateway::new());
    }
    match HttpGateway::new(&config.gateway.base_url) {
        Ok(gateway) => PanelGateway::Http(gateway),
        Err(e) => {
            tracing::error!("{}, using in-memory gateway", e);
            PanelGateway::Memory(MemoryGateway::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_config_uses_memory() {
        assert!(!make_gateway(&PanelConfig::offline()).is_remote());
    }

    #[test]
    fn test_default_config_uses_http() {
        assert!(make_gateway(&PanelConfig::default()).is_remote());
    }

    #[test]
    fn test_bad_url_falls_back_to_memory() {
        assert!(!make_gateway(&PanelConfig::new("not a url")).is_remote());
    }

    #[tokio::test]
    async fn test_memory_variant_delegates() {
        let gateway = make_gateway(&PanelConfig::offline());
        let created = gateway
            .create(&UserDraft::new("A", "a@x.com", "1"))
            .await
            .unwrap();
        let updated = gateway.update(&created.id, &UserPatch::name("B")).await.unwrap();

        assert_eq!(updated.name, "B");
        assert_eq!(gateway.list().await.unwrap(), vec![updated]);
    }
}
