pub mod base;
pub mod http_client;

// Re-export so code outside can do "use crate::client::SessionClient;"
pub use base::SessionClient;
pub use http_client::HttpSessionClient;
