//! The route table and the access guard.
//!
//! Access control is configuration data on each route, not conditionals
//! scattered through the shell: adding another gated route is a table
//! change. The guard itself is a pure decision function re-evaluated on
//! every render.

use std::collections::HashMap;

use crate::models::User;

/// Where unauthenticated access to a gated route is sent.
pub const LOGIN_PATH: &str = "/login";

/// Per-route access classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    Public,
    Authenticated,
}

/// The visual component a route resolves to. Rendering these is outside
/// this crate; the shell only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Home,
    Login,
    Register,
    Editor,
    Item,
    Settings,
    ProfileFavorites,
    Profile,
}

/// A single route table entry. Patterns use `:name` for path parameters.
#[derive(Debug)]
pub struct Route {
    pub pattern: &'static str,
    pub screen: ScreenKind,
    pub policy: AccessPolicy,
}

/// A successful path resolution: the matched entry plus captured params.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: HashMap<String, String>,
}

/// The static route table, immutable for the process lifetime.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The Conduit client's route table. Only `/settings` is gated.
    pub fn conduit() -> Self {
        use AccessPolicy::{Authenticated, Public};
        use ScreenKind::*;

        let routes = vec![
            Route { pattern: "/", screen: Home, policy: Public },
            Route { pattern: "/login", screen: Login, policy: Public },
            Route { pattern: "/register", screen: Register, policy: Public },
            Route { pattern: "/editor/:slug", screen: Editor, policy: Public },
            Route { pattern: "/editor", screen: Editor, policy: Public },
            Route { pattern: "/item/:id", screen: Item, policy: Public },
            Route { pattern: "/settings", screen: Settings, policy: Authenticated },
            Route { pattern: "/:username/favorites", screen: ProfileFavorites, policy: Public },
            Route { pattern: "/:username", screen: Profile, policy: Public },
        ];
        RouteTable { routes }
    }

    /// Resolves a path to the most specific matching entry: among entries
    /// with the right segment count, the one binding the most literal
    /// segments wins. Ties keep table order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let mut best: Option<(usize, RouteMatch<'_>)> = None;
        for route in &self.routes {
            if let Some((literals, params)) = match_pattern(route.pattern, path) {
                let better = match &best {
                    Some((best_literals, _)) => literals > *best_literals,
                    None => true,
                };
                if better {
                    best = Some((literals, RouteMatch { route, params }));
                }
            }
        }
        best.map(|(_, m)| m)
    }
}

/// Matches `path` against `pattern`, returning the number of literal
/// segments matched and the captured parameters.
fn match_pattern(pattern: &str, path: &str) -> Option<(usize, HashMap<String, String>)> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    let mut literals = 0;
    for (pattern_segment, path_segment) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_segment.strip_prefix(':') {
            params.insert(name.to_string(), (*path_segment).to_string());
        } else if pattern_segment == path_segment {
            literals += 1;
        } else {
            return None;
        }
    }
    Some((literals, params))
}

/// The guard's verdict for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectTo(&'static str),
}

/// Decides whether the current identity may see a route. Pure and
/// stateless; callers re-evaluate it on every render.
pub fn can_access(policy: AccessPolicy, current_user: Option<&User>) -> RouteDecision {
    match policy {
        AccessPolicy::Public => RouteDecision::Render,
        AccessPolicy::Authenticated if current_user.is_some() => RouteDecision::Render,
        AccessPolicy::Authenticated => RouteDecision::RedirectTo(LOGIN_PATH),
    }
}
