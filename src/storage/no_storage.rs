use super::base::CredentialStorage;

/// A no-op storage that never holds a credential, used when credential
/// storage is disabled. The shell then always boots anonymously.
pub struct NoStorage;

impl NoStorage {
    pub fn new() -> Self {
        NoStorage
    }
}

impl Default for NoStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStorage for NoStorage {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn is_enabled(&self) -> bool {
        false
    }
}
