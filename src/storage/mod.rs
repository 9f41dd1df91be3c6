pub mod base;
pub mod file_storage;
pub mod no_storage;

// Re-export the primary storage items so code outside can do
// "use crate::storage::{CredentialStorage, create_storage};"
pub use base::{create_storage, CredentialStorage, CREDENTIAL_KEY};
