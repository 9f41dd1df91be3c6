use std::io::Write;
use std::sync::{Arc, Mutex};

use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use conduit_shell::client::HttpSessionClient;
use conduit_shell::navigator::Navigator;
use conduit_shell::shell::AppShell;
use conduit_shell::storage::file_storage::{FileStorage, FileStorageConfig};
use conduit_shell::storage::CREDENTIAL_KEY;
use conduit_shell::store::Store;

#[derive(Serialize)]
struct Claims {
    sub: String,
    exp: i64,
}

/// Mint a real HS256 token with the given expiry (seconds since epoch).
pub fn mint_token(exp: i64) -> String {
    let claims = Claims {
        sub: "jake".to_string(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("token should encode")
}

/// Records every navigation the shell performs.
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(RecordingNavigator {
            paths: Mutex::new(Vec::new()),
        })
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// Writes a credential storage file holding `token` under the fixed key.
pub fn credential_file(token: Option<&str>) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp storage file");
    let contents = match token {
        Some(token) => format!(r#"{{"{}": "{}"}}"#, CREDENTIAL_KEY, token),
        None => "{}".to_string(),
    };
    file.write_all(contents.as_bytes())
        .expect("write storage file");
    file
}

/// Builds a shell wired to real file storage and the real HTTP client,
/// pointed at a mock server.
pub fn build_shell(
    api_base_url: &str,
    storage_file: &tempfile::NamedTempFile,
) -> (AppShell, Arc<RecordingNavigator>) {
    let storage = FileStorage::new(&FileStorageConfig {
        path: storage_file.path().to_path_buf(),
    });
    let client = Arc::new(HttpSessionClient::new(api_base_url));
    let navigator = RecordingNavigator::new();

    let shell = AppShell::new(
        Store::new("Conduit"),
        Arc::new(storage),
        client,
        navigator.clone(),
    );
    (shell, navigator)
}
