//! Navigation collaborator.
//!
//! Navigation at this layer is synchronous and non-failing; what a path
//! change means visually is up to the embedding application.

use std::sync::Mutex;

use tracing::info;

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Logs each navigation and remembers the current location.
pub struct TracingNavigator {
    location: Mutex<Option<String>>,
}

impl TracingNavigator {
    pub fn new() -> Self {
        TracingNavigator {
            location: Mutex::new(None),
        }
    }

    /// The most recently navigated-to path, if any.
    pub fn location(&self) -> Option<String> {
        self.location.lock().unwrap().clone()
    }
}

impl Default for TracingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        info!("Navigating to {}", path);
        *self.location.lock().unwrap() = Some(path.to_string());
    }
}
