use std::sync::Mutex;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::base::SessionClient;
use crate::models::User;

/// The API wraps the user record in a `{"user": ...}` envelope.
#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

/// A `SessionClient` backed by the Conduit HTTP API.
pub struct HttpSessionClient {
    api_base_url: String,
    client: reqwest::Client,
    token: Mutex<Option<String>>,
}

impl HttpSessionClient {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        HttpSessionClient {
            api_base_url,
            client: reqwest::Client::new(),
            token: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    fn set_token(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    async fn current_session(&self) -> Result<User, String> {
        let url = format!("{}/user", self.api_base_url);
        debug!("Resolving current session at {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = self.token.lock().unwrap().clone() {
            request = request.header("Authorization", format!("Token {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("failed to call session endpoint: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("session endpoint returned {}", response.status()));
        }

        let body: UserResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse session response: {}", e))?;

        Ok(body.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    /// Test that the configured credential is presented with the `Token`
    /// scheme and the user envelope is unwrapped.
    #[tokio::test]
    async fn test_current_session_success() {
        let response_body =
            r#"{"user": {"username": "jake", "email": "jake@jake.jake", "token": "aaa.bbb.ccc"}}"#;

        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/user")
            .match_header("authorization", "Token aaa.bbb.ccc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create_async()
            .await;

        let client = HttpSessionClient::new(server.url());
        client.set_token("aaa.bbb.ccc");

        let user = client.current_session().await;
        m.assert_async().await;
        let user = user.expect("session should resolve");
        assert_eq!(user.username, "jake");
        assert_eq!(user.token.as_deref(), Some("aaa.bbb.ccc"));
    }

    /// A rejected credential resolves to an error the caller tolerates.
    #[tokio::test]
    async fn test_current_session_unauthorized() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/user")
            .with_status(401)
            .with_body(r#"{"errors": {"body": ["unauthorized"]}}"#)
            .create_async()
            .await;

        let client = HttpSessionClient::new(server.url());
        client.set_token("expired.token.here");

        let result = client.current_session().await;
        m.assert_async().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_current_session_bad_body() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/user")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = HttpSessionClient::new(server.url());
        let result = client.current_session().await;
        m.assert_async().await;
        assert!(result.is_err());
    }
}
