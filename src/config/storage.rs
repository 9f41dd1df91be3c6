use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::file_storage::FileStorageConfig;

/// A wrapper for the credential storage configuration:
/// - enabled: if false, storage is effectively disabled (NoStorage) and
///   the shell always boots anonymously.
/// - backend: the actual storage backend (file, etc.).
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct StorageConfig {
    pub enabled: bool,
    #[serde(flatten)]
    pub backend: Option<StorageBackend>,
}

/// The existing storage backends. We differentiate them via a "type" tag
/// in the YAML.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
#[serde(tag = "type")]
pub enum StorageBackend {
    #[serde(rename = "file")]
    File(FileStorageConfig),
    // Add more variants here as needed, like:
    // #[serde(rename = "keyring")]
    // Keyring(KeyringStorageConfig),
}
