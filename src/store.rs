//! Shared application state.
//!
//! The store is the single owner of the session and navigation state the
//! shell reacts to. All writes go through [`Store::dispatch`] with one of
//! the two intents; everything else only takes snapshots.

use tracing::debug;

use crate::models::User;

/// The two state transitions the shell is allowed to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The bootstrap finished; `user` is `None` for an anonymous session.
    AppLoad {
        user: Option<User>,
        token: Option<String>,
    },
    /// A pending redirect target was consumed and must be cleared.
    Redirect,
}

/// Shared state backing the application shell.
#[derive(Debug, Default)]
pub struct Store {
    app_loaded: bool,
    app_name: String,
    current_user: Option<User>,
    token: Option<String>,
    redirect_to: Option<String>,
}

impl Store {
    pub fn new(app_name: impl Into<String>) -> Self {
        Store {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Applies an intent to the state. `app_loaded` is monotonic: once the
    /// load has finished, a later `AppLoad` is ignored rather than allowed
    /// to rewrite the session.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::AppLoad { user, token } => {
                if self.app_loaded {
                    debug!("Ignoring AppLoad after load already finished");
                    return;
                }
                self.app_loaded = true;
                self.current_user = user;
                self.token = token;
            }
            Intent::Redirect => {
                self.redirect_to = None;
            }
        }
    }

    /// Arms the one-shot redirect target. This is the hook for collaborators
    /// outside this fragment (login, logout, editors) that want the shell to
    /// navigate on their behalf.
    pub fn request_redirect(&mut self, path: impl Into<String>) {
        self.redirect_to = Some(path.into());
    }

    pub fn app_loaded(&self) -> bool {
        self.app_loaded
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn redirect_to(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }
}
