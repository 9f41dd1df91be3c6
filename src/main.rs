use std::env;
use std::sync::Arc;

use tracing::info;

use conduit_shell::client::HttpSessionClient;
use conduit_shell::config::{load_config, print_schema};
use conduit_shell::navigator::TracingNavigator;
use conduit_shell::shell::AppShell;
use conduit_shell::storage::create_storage;
use conduit_shell::store::Store;
use conduit_shell::utils::logger::init_logging;

#[tokio::main]
async fn main() {
    // `--schema` prints the config JSON schema and exits.
    if env::args().any(|arg| arg == "--schema") {
        print_schema();
        return;
    }

    let config = load_config();
    init_logging(&config.logging);

    info!("Starting {} shell", config.app_name);

    let store = Store::new(config.app_name.clone());
    let storage = create_storage(&config.storage);
    let client = Arc::new(HttpSessionClient::new(config.api_base_url.clone()));
    let navigator = Arc::new(TracingNavigator::new());

    let mut shell = AppShell::new(store, storage, client, navigator.clone());
    shell.bootstrap().await;
    shell.consume_redirect();

    let view = shell.render(&config.initial_path);
    info!("Initial view for '{}': {:?}", config.initial_path, view);
    if let Some(location) = navigator.location() {
        info!("Shell navigated to {}", location);
    }
}
