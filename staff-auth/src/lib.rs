// Session guard and the pieces it is built from.

pub mod guard;
pub mod identity;
pub mod storage;
pub mod verifier;

pub use guard::{SessionGuard, DEFAULT_SESSION_KEY};
pub use identity::Identity;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage, StorageError, StorageResult};
pub use verifier::{CredentialVerifier, LocalCredentialOptions, LocalCredentials};
