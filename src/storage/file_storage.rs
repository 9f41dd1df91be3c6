use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::base::CredentialStorage;

/// Config for the file-backed credential storage: a single JSON object
/// file mapping keys to string values, the desktop analogue of a browser's
/// local storage.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct FileStorageConfig {
    pub path: PathBuf,
}

/// Reads credentials from a JSON object file on disk.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(config: &FileStorageConfig) -> Self {
        debug!("Using file credential storage at {:?}", config.path);
        FileStorage {
            path: config.path.clone(),
        }
    }
}

impl CredentialStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        // A missing file simply means no credential was ever persisted.
        let raw = std::fs::read_to_string(&self.path).ok()?;

        let document: Value = match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(e) => {
                warn!("Credential storage file {:?} is not valid JSON: {}", self.path, e);
                return None;
            }
        };

        document.get(key)?.as_str().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn storage_with(contents: &str) -> (tempfile::NamedTempFile, FileStorage) {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write storage file");
        let storage = FileStorage::new(&FileStorageConfig {
            path: file.path().to_path_buf(),
        });
        (file, storage)
    }

    #[test]
    fn test_load_existing_key() {
        let (_file, storage) = storage_with(r#"{"jwt": "aaa.bbb.ccc"}"#);
        assert_eq!(storage.load("jwt"), Some("aaa.bbb.ccc".to_string()));
    }

    #[test]
    fn test_load_missing_key() {
        let (_file, storage) = storage_with(r#"{"other": "value"}"#);
        assert_eq!(storage.load("jwt"), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let storage = FileStorage::new(&FileStorageConfig {
            path: PathBuf::from("/nonexistent/credentials.json"),
        });
        assert_eq!(storage.load("jwt"), None);
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let (_file, storage) = storage_with("not json");
        assert_eq!(storage.load("jwt"), None);
    }
}
