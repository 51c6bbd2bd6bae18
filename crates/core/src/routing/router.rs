use tracing::debug;

use super::{resolve, NavigationEnv, Route, RouteMatch, RouteParams, RouterError};
use crate::observe::{Subscribers, Subscription};

/// Single source of truth for where the user currently is.
///
/// The router holds the current path, records navigations in its
/// [`NavigationEnv`], and tells subscribers about every change. Navigation is
/// synchronous: there is no pending state between a request and the new path.
pub struct Router<V, H> {
    routes: Vec<Route<V>>,
    env: H,
    current_path: String,
    listeners: Subscribers<String>,
}

impl<V, H> std::fmt::Debug for Router<V, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes_count", &self.routes.len())
            .field("current_path", &self.current_path)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<V, H: NavigationEnv> Router<V, H> {
    /// Create a router over `routes`, starting at the environment's current path.
    pub fn new(routes: Vec<Route<V>>, env: H) -> Self {
        let current_path = env.current_path();
        Self { routes, env, current_path, listeners: Subscribers::new() }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn env(&self) -> &H {
        &self.env
    }

    /// Go to `path`: push a history entry, update the current path, then
    /// notify subscribers.
    ///
    /// Navigating to the current path pushes again and re-notifies.
    pub fn navigate(&mut self, path: &str) -> Result<(), RouterError> {
        if !path.starts_with('/') {
            return Err(RouterError::InvalidPath(path.to_string()));
        }
        self.env.push(path)?;
        debug!(from = %self.current_path, to = %path, "navigate");
        self.set_current(path.to_string());
        Ok(())
    }

    /// React to back/forward navigation that happened outside `navigate`.
    ///
    /// Re-reads the environment's path and notifies subscribers exactly as an
    /// internal navigation would.
    pub fn handle_external_navigation(&mut self) {
        let path = self.env.current_path();
        debug!(from = %self.current_path, to = %path, "external navigation");
        self.set_current(path);
    }

    /// Step the environment back and process it as an external navigation.
    ///
    /// Returns `false` (and notifies nobody) when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        if !self.env.back() {
            return false;
        }
        self.handle_external_navigation();
        true
    }

    /// Step the environment forward and process it as an external navigation.
    pub fn forward(&mut self) -> bool {
        if !self.env.forward() {
            return false;
        }
        self.handle_external_navigation();
        true
    }

    /// Register for path changes. The handler receives the new path.
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&String) + 'static,
    {
        self.listeners.subscribe(handler)
    }

    /// Resolve an arbitrary path against this router's table.
    pub fn resolve<'a>(&'a self, path: &str) -> Option<RouteMatch<'a, V>> {
        resolve(path, &self.routes)
    }

    /// Resolve the current path.
    pub fn current_match(&self) -> Option<RouteMatch<'_, V>> {
        resolve(&self.current_path, &self.routes)
    }

    /// Parameters of the current path; empty when nothing (or a literal route) matched.
    pub fn params(&self) -> RouteParams {
        self.current_match().map(|m| m.params).unwrap_or_default()
    }

    /// The view bound to the current path, if any.
    pub fn render(&self) -> Option<&V> {
        self.current_match().map(|m| m.view())
    }

    fn set_current(&mut self, path: String) {
        self.current_path = path;
        self.listeners.notify(&self.current_path);
    }
}
