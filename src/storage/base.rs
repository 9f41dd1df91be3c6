use std::sync::Arc;

use tracing::{error, info};

use super::{file_storage::FileStorage, no_storage::NoStorage};
use crate::config::{StorageBackend, StorageConfig};

/// The fixed key under which the login flow persists the session credential.
pub const CREDENTIAL_KEY: &str = "jwt";

/// The CredentialStorage trait abstracts the durable client-local storage
/// the bootstrap reads its credential from. Writing and removing values is
/// owned by the login/logout flows, so only reads are modeled here.
pub trait CredentialStorage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    fn is_enabled(&self) -> bool {
        // Default implementation should return always True for real storage
        // backends. NoStorage returns false so we can write better debug
        // messages.
        true
    }
}

/// Creates a concrete storage implementation based on the StorageConfig.
/// If `storage.enabled = false`, returns NoStorage. Otherwise, picks the
/// specified backend.
pub fn create_storage(config: &StorageConfig) -> Arc<dyn CredentialStorage> {
    if !config.enabled {
        info!("Credential storage is disabled. Using NoStorage.");
        return Arc::new(NoStorage::new());
    }

    match &config.backend {
        Some(StorageBackend::File(file_config)) => Arc::new(FileStorage::new(file_config)),
        None => {
            error!("Storage is enabled, but no backend config is provided!");
            std::process::exit(1);
        }
    }
}
