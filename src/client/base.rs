use async_trait::async_trait;

use crate::models::User;

/// The transport collaborator the bootstrap talks to. It is configured
/// once with the persisted credential, then asked to resolve "who am I".
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Configures subsequent outbound requests with the given credential.
    fn set_token(&self, token: &str);

    /// Resolves the current session to a user record. A failure is not an
    /// exceptional condition for the caller; it resolves the session to
    /// "nobody".
    async fn current_session(&self) -> Result<User, String>;
}
