//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route table invariants (unique names and paths, valid patterns)
//! - Validate values (base path, bind address, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::schema::RouterConfig;
use crate::routing::router::{check_routes, Route, RouteTableError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Route(#[from] RouteTableError),

    #[error("no routes declared")]
    NoRoutes,

    #[error("base path {0:?} must not contain a query or hash")]
    InvalidBasePath(String),

    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),

    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let routes: Vec<Route> = config.routes.iter().map(Route::from).collect();
    errors.extend(check_routes(&routes).into_iter().map(ValidationError::from));

    let base = &config.history.base_path;
    if base.contains('?') || base.contains('#') {
        errors.push(ValidationError::InvalidBasePath(base.clone()));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::views::ViewId;

    fn route(path: &str, name: &str) -> RouteConfig {
        RouteConfig {
            path: path.to_string(),
            name: name.to_string(),
            view: ViewId::HomeView,
            props: false,
            sensitive: false,
            strict: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&RouterConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = RouterConfig::default();
        config.routes = vec![route("/", "home"), route("/inicio", "home"), route("/inicio", "x")];
        config.history.base_path = "/app?x=1".to_string();
        config.listener.bind_address = "localhost".to_string();
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::Route(RouteTableError::DuplicateName("home".to_string())),
                ValidationError::Route(RouteTableError::DuplicatePath("/inicio".to_string())),
                ValidationError::InvalidBasePath("/app?x=1".to_string()),
                ValidationError::InvalidBindAddress("localhost".to_string()),
                ValidationError::InvalidLogLevel("loud".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_routes() {
        let mut config = RouterConfig::default();
        config.routes.clear();
        assert_eq!(validate_config(&config), Err(vec![ValidationError::NoRoutes]));
    }
}
