use super::{NavigationEnv, Router, RouterError};

/// Explicit provider for the application's router.
///
/// Views receive the context rather than reaching for a global. Until a router
/// is provided (or after teardown) every accessor returns
/// [`RouterError::OutsideContext`].
#[derive(Debug)]
pub struct RouterContext<V, H> {
    router: Option<Router<V, H>>,
}

impl<V, H> Default for RouterContext<V, H> {
    fn default() -> Self {
        Self { router: None }
    }
}

impl<V, H: NavigationEnv> RouterContext<V, H> {
    /// A context with no router installed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context providing `router`.
    pub fn provide(router: Router<V, H>) -> Self {
        Self { router: Some(router) }
    }

    pub fn is_initialized(&self) -> bool {
        self.router.is_some()
    }

    pub fn router(&self) -> Result<&Router<V, H>, RouterError> {
        self.router.as_ref().ok_or(RouterError::OutsideContext)
    }

    pub fn router_mut(&mut self) -> Result<&mut Router<V, H>, RouterError> {
        self.router.as_mut().ok_or(RouterError::OutsideContext)
    }

    pub fn current_path(&self) -> Result<&str, RouterError> {
        Ok(self.router()?.current_path())
    }

    pub fn navigate(&mut self, path: &str) -> Result<(), RouterError> {
        self.router_mut()?.navigate(path)
    }

    /// Remove and return the router, ending its lifecycle in this context.
    pub fn teardown(&mut self) -> Option<Router<V, H>> {
        self.router.take()
    }
}
