use std::sync::Arc;

use anyhow::Result;
use staff_auth::{
    FileSessionStorage, LocalCredentials, MemorySessionStorage, SessionGuard, SessionStorage,
    DEFAULT_SESSION_KEY,
};
use staff_core::{StaffConfig, StaffConfigSnapshot};
use tracing::info;

use crate::dashboard::Dashboard;
use crate::services::{self, EmployeeStore};

/// The wired application: configuration, employee store and session guard.
pub struct StaffDesk {
    pub config: StaffConfigSnapshot,
    pub store: EmployeeStore,
    pub session: Arc<SessionGuard>,
}

impl StaffDesk {
    pub async fn build(config: StaffConfig) -> Result<Self> {
        let config = config.snapshot();

        let store = services::configure(&config);

        let hash_cost = config.get_u32("auth.hash_cost").unwrap_or(10);
        let verifier = Arc::new(LocalCredentials::demo_with_cost(hash_cost)?);
        let storage = session_storage(&config);
        let key = config
            .get_string("session.key")
            .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string());

        let session = Arc::new(SessionGuard::restore(verifier, storage, key).await?);

        Ok(Self {
            config,
            store,
            session,
        })
    }

    /// Open the dashboard for the current session.
    pub async fn dashboard(&self) -> Result<Dashboard> {
        Dashboard::open(self.store.clone(), self.session.clone()).await
    }
}

fn session_storage(config: &StaffConfigSnapshot) -> Arc<dyn SessionStorage> {
    match config.get("session.storage") {
        Some("file") => {
            let dir = config.get("session.dir").unwrap_or(".staffdesk");
            info!(%dir, "remembering sessions on disk");
            Arc::new(FileSessionStorage::new(dir))
        }
        _ => Arc::new(MemorySessionStorage::new()),
    }
}
