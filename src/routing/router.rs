//! Route lookup and reverse routing.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Look up the matching route for a request path
//! - Build paths for named navigation
//! - Return matched route or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Names and path patterns are unique; checked at construction
//! - A view's required inputs must be bound by its route's params
//! - First match wins (declaration order)

use serde::Serialize;
use thiserror::Error;

use crate::config::RouteConfig;
use crate::routing::matcher::{self, MatchOptions, Matcher};
use crate::routing::pattern::{ParamError, Params, PathPattern, PatternError, Segment};
use crate::views::ViewId;

/// A declarative route: pattern, name, view and props mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub view: ViewId,
    /// Pass matched params to the view as direct inputs.
    pub props: bool,
    pub sensitive: bool,
    pub strict: bool,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
            props: false,
            sensitive: false,
            strict: false,
        }
    }

    pub fn with_props(mut self, props: bool) -> Self {
        self.props = props;
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn options(&self) -> MatchOptions {
        MatchOptions {
            sensitive: self.sensitive,
            strict: self.strict,
        }
    }
}

impl From<&RouteConfig> for Route {
    fn from(config: &RouteConfig) -> Self {
        Route::new(config.path.clone(), config.name.clone(), config.view)
            .with_props(config.props)
            .sensitive(config.sensitive)
            .strict(config.strict)
    }
}

/// Result of resolving a path against the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: Params,
}

/// Errors detected while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route name {0:?} is declared more than once")]
    DuplicateName(String),

    #[error("route path {0:?} duplicates an earlier route and can never match")]
    DuplicatePath(String),

    #[error("route {route:?}: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("route {route:?}: view {view} needs input {input:?}, which the route does not pass as a prop")]
    UnboundViewInput {
        route: String,
        view: ViewId,
        input: &'static str,
    },
}

/// Errors from named navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route named {0:?}")]
    UnknownRoute(String),

    #[error("route {route:?}: {source}")]
    Param {
        route: String,
        #[source]
        source: ParamError,
    },
}

#[derive(Debug)]
struct CompiledRoute {
    route: Route,
    pattern: PathPattern,
    matcher: Box<dyn Matcher>,
}

/// Ordered, immutable set of routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    /// Build a table, rejecting the first invariant violation found.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        if let Some(err) = check_routes(&routes).into_iter().next() {
            return Err(err);
        }

        let routes = routes
            .into_iter()
            .map(|route| {
                let pattern = PathPattern::parse(&route.path).map_err(|source| {
                    RouteTableError::InvalidPattern {
                        route: route.name.clone(),
                        source,
                    }
                })?;
                let matcher = matcher::compile(&pattern, route.options());
                Ok(CompiledRoute {
                    route,
                    pattern,
                    matcher,
                })
            })
            .collect::<Result<Vec<_>, RouteTableError>>()?;

        tracing::debug!(routes = routes.len(), "Route table built");
        Ok(Self { routes })
    }

    /// Build a table from configuration entries.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteTableError> {
        Self::new(routes.iter().map(Route::from).collect())
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|c| &c.route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.find(name).map(|c| &c.route)
    }

    /// Resolve a request path (no query or hash) to a route.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let found = self.routes.iter().find_map(|compiled| {
            compiled
                .matcher
                .match_path(path)
                .map(|params| RouteMatch {
                    route: &compiled.route,
                    params,
                })
        });

        match &found {
            Some(m) => tracing::debug!(path = %path, route = %m.route.name, "Route matched"),
            None => tracing::debug!(path = %path, "No route matched"),
        }
        found
    }

    /// Build the path for a named route.
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let compiled = self
            .find(name)
            .ok_or_else(|| NavigationError::UnknownRoute(name.to_string()))?;

        for extra in params
            .keys()
            .filter(|k| !compiled.pattern.param_names().any(|p| p == k.as_str()))
        {
            tracing::warn!(route = %name, param = %extra, "Discarding param not declared by route");
        }

        compiled
            .pattern
            .build(params)
            .map_err(|source| NavigationError::Param {
                route: name.to_string(),
                source,
            })
    }

    fn find(&self, name: &str) -> Option<&CompiledRoute> {
        self.routes.iter().find(|c| c.route.name == name)
    }
}

/// Check every table invariant, returning all violations.
pub fn check_routes(routes: &[Route]) -> Vec<RouteTableError> {
    let mut errors = Vec::new();
    let mut names: Vec<&str> = Vec::new();
    let mut earlier: Vec<(&Route, PathPattern)> = Vec::new();

    for route in routes {
        if names.contains(&route.name.as_str()) {
            errors.push(RouteTableError::DuplicateName(route.name.clone()));
        } else {
            names.push(&route.name);
        }

        let pattern = match PathPattern::parse(&route.path) {
            Ok(p) => p,
            Err(source) => {
                errors.push(RouteTableError::InvalidPattern {
                    route: route.name.clone(),
                    source,
                });
                continue;
            }
        };

        if earlier
            .iter()
            .any(|(prev, prev_pattern)| shadows(prev, prev_pattern, &pattern))
        {
            errors.push(RouteTableError::DuplicatePath(route.path.clone()));
        }

        for &input in route.view.required_inputs() {
            let bound = route.props && pattern.param_names().any(|p| p == input);
            if !bound {
                errors.push(RouteTableError::UnboundViewInput {
                    route: route.name.clone(),
                    view: route.view,
                    input,
                });
            }
        }

        earlier.push((route, pattern));
    }

    errors
}

/// True when `later` has the same shape as `prev` and so can never match.
///
/// Params act as wildcards regardless of name; static segments compare
/// under `prev`'s case rule.
fn shadows(prev: &Route, prev_pattern: &PathPattern, pattern: &PathPattern) -> bool {
    let (a, b) = (prev_pattern.segments(), pattern.segments());
    a.len() == b.len()
        && a.iter().zip(b).all(|pair| match pair {
            (Segment::Param(_), Segment::Param(_)) => true,
            (Segment::Static(x), Segment::Static(y)) => {
                if prev.sensitive {
                    x == y
                } else {
                    x.eq_ignore_ascii_case(y)
                }
            }
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_routes() -> Vec<Route> {
        vec![
            Route::new("/", "home", ViewId::HomeView),
            Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails).with_props(true),
        ]
    }

    #[test]
    fn test_resolve_home() {
        let table = RouteTable::new(app_routes()).unwrap();
        let m = table.resolve("/").unwrap();
        assert_eq!(m.route.name, "home");
        assert!(m.params.is_empty());
    }

    #[test]
    fn test_resolve_details() {
        let table = RouteTable::new(app_routes()).unwrap();
        let m = table.resolve("/operadora/12345678000190").unwrap();
        assert_eq!(m.route.view, ViewId::OperadoraDetails);
        assert_eq!(m.params.get("cnpj").map(String::as_str), Some("12345678000190"));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            Route::new("/operadora/novas", "novas", ViewId::HomeView),
            Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails).with_props(true),
        ])
        .unwrap();
        assert_eq!(table.resolve("/operadora/novas").unwrap().route.name, "novas");
        assert_eq!(table.resolve("/operadora/123").unwrap().route.name, "details");
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "home", ViewId::HomeView),
            Route::new("/inicio", "home", ViewId::HomeView),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName("home".to_string()));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "home", ViewId::HomeView),
            Route::new("/", "inicio", ViewId::HomeView),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/".to_string()));
    }

    #[test]
    fn test_same_shape_path_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails).with_props(true),
            Route::new("/operadora/:id", "by-id", ViewId::HomeView),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/operadora/:id".to_string()));

        let err = RouteTable::new(vec![
            Route::new("/Sobre", "sobre", ViewId::HomeView),
            Route::new("/sobre", "about", ViewId::HomeView),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicatePath("/sobre".to_string()));
    }

    #[test]
    fn test_reachable_variants_accepted() {
        // Case-sensitive earlier route leaves other casings to later ones
        let table = RouteTable::new(vec![
            Route::new("/Sobre", "sobre", ViewId::HomeView).sensitive(true),
            Route::new("/sobre", "about", ViewId::HomeView),
        ])
        .unwrap();
        assert_eq!(table.resolve("/SOBRE").unwrap().route.name, "about");

        // Static segment and param differ in shape
        assert!(RouteTable::new(vec![
            Route::new("/operadora/novas", "novas", ViewId::HomeView),
            Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails).with_props(true),
        ])
        .is_ok());
    }

    #[test]
    fn test_lookup_by_name() {
        let table = RouteTable::new(app_routes()).unwrap();
        assert_eq!(table.get("details").map(|r| r.view), Some(ViewId::OperadoraDetails));
        assert!(table.get("nope").is_none());
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert!(RouteTable::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_unbound_view_input_rejected() {
        let err = RouteTable::new(vec![Route::new(
            "/operadora/:cnpj",
            "details",
            ViewId::OperadoraDetails,
        )])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::UnboundViewInput { input: "cnpj", .. }));

        let err = RouteTable::new(vec![
            Route::new("/operadora/:id", "details", ViewId::OperadoraDetails).with_props(true),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::UnboundViewInput { .. }));
    }

    #[test]
    fn test_check_routes_reports_all() {
        let errors = check_routes(&[
            Route::new("/", "home", ViewId::HomeView),
            Route::new("/", "home", ViewId::HomeView),
            Route::new("sem-barra", "x", ViewId::HomeView),
        ]);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_path_for() {
        let table = RouteTable::new(app_routes()).unwrap();
        let mut params = Params::new();
        params.insert("cnpj".to_string(), "12345678000190".to_string());
        assert_eq!(
            table.path_for("details", &params).unwrap(),
            "/operadora/12345678000190"
        );
        assert_eq!(table.path_for("home", &params).unwrap(), "/");
    }

    #[test]
    fn test_path_for_errors() {
        let table = RouteTable::new(app_routes()).unwrap();
        assert_eq!(
            table.path_for("nope", &Params::new()),
            Err(NavigationError::UnknownRoute("nope".to_string()))
        );
        assert!(matches!(
            table.path_for("details", &Params::new()),
            Err(NavigationError::Param {
                source: ParamError::Missing(_),
                ..
            })
        ));
    }
}
