use std::collections::BTreeMap;

use super::pattern::{PatternError, RoutePattern};

/// Parameter bindings derived from a path and the matched route's pattern.
pub type RouteParams = BTreeMap<String, String>;

/// A static route declaration binding a pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pattern: RoutePattern,
    view: V,
}

impl<V> Route<V> {
    /// Parse `pattern` and bind it to `view`.
    pub fn new(pattern: &str, view: V) -> Result<Self, PatternError> {
        Ok(Self { pattern: RoutePattern::parse(pattern)?, view })
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// A successful resolution: the chosen route and its parameter bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
    pub route: &'a Route<V>,
    pub params: RouteParams,
}

impl<'a, V> RouteMatch<'a, V> {
    pub fn view(&self) -> &'a V {
        &self.route.view
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Resolve `path` against an ordered route table.
///
/// An exact string match anywhere in the table wins. Otherwise the first
/// parameterized route (in declaration order) whose segments match is used.
/// `None` means no view is bound to the path.
pub fn resolve<'a, V>(path: &str, routes: &'a [Route<V>]) -> Option<RouteMatch<'a, V>> {
    if let Some(route) = routes.iter().find(|route| route.pattern.as_str() == path) {
        return Some(RouteMatch { route, params: RouteParams::new() });
    }

    routes.iter().filter(|route| route.pattern.is_parameterized()).find_map(|route| {
        let captured = route.pattern.match_segments(path)?;
        let params = captured.into_iter().collect();
        Some(RouteMatch { route, params })
    })
}
