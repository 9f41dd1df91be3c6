//! The application shell.
//!
//! Ties the pieces together: the one-shot session bootstrap, the
//! consume-once redirect target, and the render state machine that keeps
//! the route table unmounted until the bootstrap has finished.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::client::SessionClient;
use crate::credential;
use crate::models::User;
use crate::navigator::Navigator;
use crate::routes::{can_access, RouteDecision, RouteTable, ScreenKind, LOGIN_PATH};
use crate::storage::{CredentialStorage, CREDENTIAL_KEY};
use crate::store::{Intent, Store};

/// The view model handed to the header collaborator in both shell states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub app_name: String,
    pub current_user: Option<User>,
}

/// What the routed region of the page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Screen {
        kind: ScreenKind,
        params: HashMap<String, String>,
    },
    /// The guard denied access; the embedder should navigate here instead.
    RedirectTo(String),
    NotFound,
}

/// The shell's render output. `Booting` carries the header only; the
/// route table is mounted once the load has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Booting { header: Header },
    Loaded { header: Header, outcome: RouteOutcome },
}

/// The application shell. Owns the store; everything else is injected.
pub struct AppShell {
    store: Store,
    storage: Arc<dyn CredentialStorage>,
    client: Arc<dyn SessionClient>,
    navigator: Arc<dyn Navigator>,
    routes: RouteTable,
    booted: bool,
}

impl AppShell {
    pub fn new(
        store: Store,
        storage: Arc<dyn CredentialStorage>,
        client: Arc<dyn SessionClient>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        AppShell {
            store,
            storage,
            client,
            navigator,
            routes: RouteTable::conduit(),
            booted: false,
        }
    }

    /// Snapshot access to the shared state.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Arms the one-shot redirect target on behalf of an external
    /// collaborator (login flow, logout button, editor save).
    pub fn request_redirect(&mut self, path: impl Into<String>) {
        self.store.request_redirect(path);
    }

    /// Runs the session bootstrap. Guarded to run exactly once per shell
    /// lifetime; later calls are no-ops, so a re-render can never issue a
    /// duplicate session request.
    ///
    /// With no stored credential the load finishes immediately as
    /// anonymous. With one, the credential is inspected locally first: an
    /// expired or undecodable credential sends the user to the login
    /// screen, but the session request still runs and the load still
    /// finishes — the two side effects are independent.
    pub async fn bootstrap(&mut self) {
        if self.booted {
            debug!("Bootstrap already ran; ignoring duplicate call");
            return;
        }
        self.booted = true;

        let token = match self.storage.load(CREDENTIAL_KEY) {
            Some(token) => token,
            None => {
                info!("No stored credential; loading as anonymous");
                self.store.dispatch(Intent::AppLoad {
                    user: None,
                    token: None,
                });
                return;
            }
        };

        match credential::is_expired(&token, Utc::now()) {
            Ok(false) => {}
            Ok(true) => {
                info!("Stored credential is expired");
                self.navigator.navigate(LOGIN_PATH);
            }
            // Fail closed: an unreadable credential is treated like an
            // expired one.
            Err(e) => {
                warn!("Stored credential is not decodable: {}", e);
                self.navigator.navigate(LOGIN_PATH);
            }
        }

        self.client.set_token(&token);
        let user = match self.client.current_session().await {
            Ok(user) => {
                info!("Resolved session for '{}'", user.username);
                Some(user)
            }
            Err(e) => {
                warn!("Session resolution failed: {}", e);
                None
            }
        };

        self.store.dispatch(Intent::AppLoad {
            user,
            token: Some(token),
        });
    }

    /// Consumes a pending redirect target: navigate, then clear it in the
    /// same step so a re-render cannot fire the same navigation twice.
    ///
    /// Unlike [`bootstrap`](Self::bootstrap) this is reactive, not
    /// once-per-lifetime: call it on every store change and it will fire
    /// for each newly armed target.
    pub fn consume_redirect(&mut self) {
        if let Some(target) = self.store.redirect_to().map(str::to_string) {
            self.navigator.navigate(&target);
            self.store.dispatch(Intent::Redirect);
        }
    }

    fn header(&self) -> Header {
        Header {
            app_name: self.store.app_name().to_string(),
            current_user: self.store.current_user().cloned(),
        }
    }

    /// Renders the shell for a path. While the bootstrap is still in
    /// flight only the header is shown; afterwards the route table is
    /// resolved and the access guard applied.
    pub fn render(&self, path: &str) -> View {
        if !self.store.app_loaded() {
            return View::Booting {
                header: self.header(),
            };
        }

        let outcome = match self.routes.resolve(path) {
            None => RouteOutcome::NotFound,
            Some(matched) => {
                match can_access(matched.route.policy, self.store.current_user()) {
                    RouteDecision::Render => RouteOutcome::Screen {
                        kind: matched.route.screen,
                        params: matched.params,
                    },
                    RouteDecision::RedirectTo(login) => {
                        RouteOutcome::RedirectTo(login.to_string())
                    }
                }
            }
        };

        View::Loaded {
            header: self.header(),
            outcome,
        }
    }
}
