//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::views::ViewId;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// History mode settings (base path).
    pub history: HistoryConfig,

    /// Listener for the deep-link server.
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route declarations, in matching order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            listener: ListenerConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: default_routes(),
        }
    }
}

/// The application's declared routes.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            path: "/".to_string(),
            name: "home".to_string(),
            view: ViewId::HomeView,
            props: false,
            sensitive: false,
            strict: false,
        },
        RouteConfig {
            path: "/operadora/:cnpj".to_string(),
            name: "details".to_string(),
            view: ViewId::OperadoraDetails,
            props: true,
            sensitive: false,
            strict: false,
        },
    ]
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Root prefix all routes are mounted under (e.g., "/app/").
    /// Overridden by the `BASE_URL` environment variable.
    pub base_path: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:5173").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5173".to_string(),
        }
    }
}

/// A single route declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern, e.g. "/operadora/:cnpj".
    pub path: String,

    /// Unique route name for named navigation.
    pub name: String,

    /// View rendered when the route matches.
    pub view: ViewId,

    /// Pass matched params to the view as direct inputs.
    #[serde(default)]
    pub props: bool,

    /// Case-sensitive static segments.
    #[serde(default)]
    pub sensitive: bool,

    /// Reject a trailing slash.
    #[serde(default)]
    pub strict: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
