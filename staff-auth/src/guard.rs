// Session guard.

use std::sync::Arc;

use anyhow::Result;
use staff_core::errors::StaffError;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::identity::Identity;
use crate::storage::{SessionStorage, StorageError};
use crate::verifier::CredentialVerifier;

/// Storage key the session is remembered under unless configured otherwise.
pub const DEFAULT_SESSION_KEY: &str = "employee_system_user";

/// Holds the current authenticated identity and mirrors it into
/// `SessionStorage` so it survives a restart.
pub struct SessionGuard {
    verifier: Arc<dyn CredentialVerifier>,
    storage: Arc<dyn SessionStorage>,
    key: String,
    current: RwLock<Option<Identity>>,
}

impl SessionGuard {
    /// Build a guard and rehydrate any remembered session.
    ///
    /// A stored payload that is not text or does not deserialize is treated
    /// as no session and removed from storage. Only an I/O failure while
    /// reading is an error.
    pub async fn restore(
        verifier: Arc<dyn CredentialVerifier>,
        storage: Arc<dyn SessionStorage>,
        key: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let raw = match storage.read(&key).await {
            Ok(raw) => raw,
            Err(e @ StorageError::Malformed { .. }) => {
                discard_malformed(storage.as_ref(), &key, &e.to_string()).await;
                None
            }
            Err(e) => return Err(e.into()),
        };

        let restored = match raw {
            None => None,
            Some(raw) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    info!(username = %identity.username, "session restored");
                    Some(identity)
                }
                Err(e) => {
                    discard_malformed(storage.as_ref(), &key, &e.to_string()).await;
                    None
                }
            },
        };

        Ok(Self {
            verifier,
            storage,
            key,
            current: RwLock::new(restored),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns `Ok(false)` for rejected credentials; the session is left as it was.
    #[instrument(skip(self, password), fields(key = %self.key))]
    pub async fn login(&self, username: &str, password: &str) -> Result<bool> {
        let Some(identity) = self.verifier.verify(username, password).await? else {
            info!("login rejected");
            return Ok(false);
        };

        let payload = serde_json::to_string(&identity)?;
        self.storage.write(&self.key, &payload).await?;
        *self.current.write().await = Some(identity);

        info!("login accepted");
        Ok(true)
    }

    /// Clears the in-memory identity first, then the stored entry.
    pub async fn logout(&self) -> Result<()> {
        let previous = self.current.write().await.take();
        if let Some(identity) = previous {
            info!(username = %identity.username, "logged out");
        }
        self.storage.remove(&self.key).await?;
        Ok(())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    /// The held identity, or a `NotAuthenticated` error.
    pub async fn require_identity(&self) -> Result<Identity> {
        self.current()
            .await
            .ok_or_else(|| StaffError::not_authenticated("Not authenticated").into_anyhow())
    }
}

/// Best-effort removal; a failure here must not block startup.
async fn discard_malformed(storage: &dyn SessionStorage, key: &str, reason: &str) {
    warn!(%key, %reason, "discarding malformed stored session");
    if let Err(e) = storage.remove(key).await {
        warn!(%key, error = %e, "could not remove malformed stored session");
    }
}
