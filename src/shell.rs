//! Rendering shell navigation.
//!
//! # Responsibilities
//! - Turn a location into a rendered page or a not-found outcome
//! - Track the current matched route, recomputed on every navigation
//! - Provide named navigation on top of the route table
//!
//! # Design Decisions
//! - Synchronous and single-owner: the latest navigation wins
//! - No back/forward stack; only the current route is kept
//! - No match is an outcome, not an error

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::routing::{Location, NavigationError, Params, RouteTable, WebHistory};
use crate::views::{Page, ViewError, ViewId};

/// The route the shell is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentRoute {
    pub name: String,
    pub view: ViewId,
    /// App-relative path (base stripped).
    pub path: String,
    /// Full address including the base.
    pub href: String,
    pub params: Params,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

/// What the shell should display after a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Rendered { route: CurrentRoute, page: Page },
    NotFound { location: String },
}

impl Outcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// Resolve a full address (base included) without touching any state.
pub fn resolve(
    table: &RouteTable,
    history: &WebHistory,
    address: &str,
) -> Result<Outcome, ViewError> {
    let location = Location::parse(address);

    let Some(path) = history.strip_base(&location.path) else {
        tracing::debug!(address = %address, base = %history.base(), "Location outside base path");
        return Ok(Outcome::NotFound {
            location: address.to_string(),
        });
    };

    let Some(route_match) = table.resolve(path) else {
        return Ok(Outcome::NotFound {
            location: address.to_string(),
        });
    };

    let page = Page::instantiate(&route_match)?;
    let route = CurrentRoute {
        name: route_match.route.name.clone(),
        view: route_match.route.view,
        path: path.to_string(),
        href: history.href(path),
        params: route_match.params,
        query: location.query,
        hash: location.hash,
    };
    Ok(Outcome::Rendered { route, page })
}

/// Navigation state for one rendering shell.
#[derive(Debug)]
pub struct Navigator {
    table: Arc<RouteTable>,
    history: WebHistory,
    current: Option<CurrentRoute>,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, history: WebHistory) -> Self {
        Self {
            table,
            history,
            current: None,
        }
    }

    /// Navigate to a full address, e.g. from the address bar or a link.
    pub fn push(&mut self, address: &str) -> Result<Outcome, ViewError> {
        let outcome = resolve(&self.table, &self.history, address)?;
        match &outcome {
            Outcome::Rendered { route, .. } => {
                tracing::info!(route = %route.name, href = %route.href, "Navigated");
                self.current = Some(route.clone());
            }
            Outcome::NotFound { location } => {
                tracing::warn!(location = %location, "No route for location");
                self.current = None;
            }
        }
        Ok(outcome)
    }

    /// Navigate to a named route.
    pub fn navigate(&mut self, name: &str, params: &Params) -> Result<Outcome, ShellError> {
        let href = self.href(name, params)?;
        Ok(self.push(&href)?)
    }

    /// Full address for a named route, without navigating.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, NavigationError> {
        let path = self.table.path_for(name, params)?;
        Ok(self.history.href(&path))
    }

    pub fn current(&self) -> Option<&CurrentRoute> {
        self.current.as_ref()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }
}
