// Credential verification.

use anyhow::Result;
use async_trait::async_trait;
use bcrypt::{hash, verify};
use staff_core::bail_staff;
use staff_core::errors::StaffError;

use crate::identity::Identity;

/// Checks a username/password pair and, on success, yields the identity to
/// hold for the session.
///
/// `Ok(None)` means the credentials were rejected. `Err` is reserved for
/// failures of the verifier itself.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<Identity>>;
}

#[derive(Clone, Debug)]
pub struct LocalCredentialOptions {
    pub hash_cost: u32,
}

impl Default for LocalCredentialOptions {
    fn default() -> Self {
        Self { hash_cost: 10 }
    }
}

/// A single username/password pair with a bcrypt-hashed password.
pub struct LocalCredentials {
    username: String,
    password_hash: String,
    identity: Identity,
}

impl LocalCredentials {
    pub const DEMO_USERNAME: &'static str = "admin";
    pub const DEMO_PASSWORD: &'static str = "admin123";

    pub fn new(username: impl Into<String>, password: &str, identity: Identity) -> Result<Self> {
        Self::with_options(username, password, identity, LocalCredentialOptions::default())
    }

    pub fn with_options(
        username: impl Into<String>,
        password: &str,
        identity: Identity,
        options: LocalCredentialOptions,
    ) -> Result<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            bail_staff!(bad_request, "Local credentials require a username");
        }
        if password.is_empty() {
            bail_staff!(bad_request, "Local credentials require a password");
        }

        let password_hash = hash(password, options.hash_cost)
            .map_err(|e| StaffError::general_error(e.to_string()).into_anyhow())?;

        Ok(Self {
            username,
            password_hash,
            identity,
        })
    }

    /// The fixed admin account: `admin` / `admin123`.
    pub fn demo() -> Result<Self> {
        Self::demo_with_cost(LocalCredentialOptions::default().hash_cost)
    }

    pub fn demo_with_cost(hash_cost: u32) -> Result<Self> {
        Self::with_options(
            Self::DEMO_USERNAME,
            Self::DEMO_PASSWORD,
            Identity::new("1", Self::DEMO_USERNAME, "administrator"),
            LocalCredentialOptions { hash_cost },
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl CredentialVerifier for LocalCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<Identity>> {
        if username.trim().is_empty() || password.is_empty() {
            return Ok(None);
        }
        if username != self.username {
            return Ok(None);
        }

        let ok = verify(password, &self.password_hash)
            .map_err(|e| StaffError::general_error(e.to_string()).into_anyhow())?;

        Ok(ok.then(|| self.identity.clone()))
    }
}
