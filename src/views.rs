//! Views and props binding.
//!
//! # Responsibilities
//! - Identify the views a route can render
//! - Bind matched params to view inputs (props passthrough)
//! - Instantiate typed views from their bound inputs
//!
//! # Design Decisions
//! - Binding is an explicit mapping step, not reflection
//! - Each view declares the inputs it requires so the route table can
//!   reject routes that would never supply them

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::{Params, RouteMatch};

/// Named inputs delivered to a view.
pub type ViewInputs = Params;

/// Views the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    HomeView,
    OperadoraDetails,
}

impl ViewId {
    /// Inputs the view cannot be built without.
    pub fn required_inputs(self) -> &'static [&'static str] {
        match self {
            ViewId::HomeView => &[],
            ViewId::OperadoraDetails => &["cnpj"],
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewId::HomeView => "HomeView",
            ViewId::OperadoraDetails => "OperadoraDetails",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("view {view} is missing input {input:?}")]
    MissingInput { view: ViewId, input: &'static str },
}

/// Inputs passed to the matched view.
///
/// Routes with props mode receive every matched param by name; other
/// routes receive nothing and must read the route params themselves.
pub fn bind_inputs(route_match: &RouteMatch<'_>) -> ViewInputs {
    if route_match.route.props {
        route_match.params.clone()
    } else {
        ViewInputs::new()
    }
}

/// A view constructible from its bound inputs.
pub trait View: Sized {
    const ID: ViewId;

    fn from_inputs(inputs: &ViewInputs) -> Result<Self, ViewError>;
}

/// Landing page listing the operadoras.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HomeView;

impl View for HomeView {
    const ID: ViewId = ViewId::HomeView;

    fn from_inputs(_inputs: &ViewInputs) -> Result<Self, ViewError> {
        Ok(HomeView)
    }
}

/// Details page for one operadora.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperadoraDetails {
    /// Raw CNPJ as it appeared in the path; validation is left to the view.
    pub cnpj: String,
}

impl View for OperadoraDetails {
    const ID: ViewId = ViewId::OperadoraDetails;

    fn from_inputs(inputs: &ViewInputs) -> Result<Self, ViewError> {
        let cnpj = inputs.get("cnpj").ok_or(ViewError::MissingInput {
            view: Self::ID,
            input: "cnpj",
        })?;
        Ok(Self { cnpj: cnpj.clone() })
    }
}

/// An instantiated view, ready for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "props")]
pub enum Page {
    HomeView(HomeView),
    OperadoraDetails(OperadoraDetails),
}

impl Page {
    /// Bind the match's inputs and build the view it points at.
    pub fn instantiate(route_match: &RouteMatch<'_>) -> Result<Self, ViewError> {
        let inputs = bind_inputs(route_match);
        let page = match route_match.route.view {
            ViewId::HomeView => Page::HomeView(HomeView::from_inputs(&inputs)?),
            ViewId::OperadoraDetails => {
                Page::OperadoraDetails(OperadoraDetails::from_inputs(&inputs)?)
            }
        };
        Ok(page)
    }

    pub fn view_id(&self) -> ViewId {
        match self {
            Page::HomeView(_) => HomeView::ID,
            Page::OperadoraDetails(_) => OperadoraDetails::ID,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route;

    fn details_match(route: &Route) -> RouteMatch<'_> {
        let mut params = Params::new();
        params.insert("cnpj".to_string(), "12345678000190".to_string());
        RouteMatch { route, params }
    }

    #[test]
    fn test_bind_inputs_props_mode() {
        let route = Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails)
            .with_props(true);
        let inputs = bind_inputs(&details_match(&route));
        assert_eq!(inputs.get("cnpj").map(String::as_str), Some("12345678000190"));
    }

    #[test]
    fn test_bind_inputs_without_props() {
        let route = Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails);
        assert!(bind_inputs(&details_match(&route)).is_empty());
    }

    #[test]
    fn test_instantiate_details() {
        let route = Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails)
            .with_props(true);
        let page = Page::instantiate(&details_match(&route)).unwrap();
        assert_eq!(
            page,
            Page::OperadoraDetails(OperadoraDetails {
                cnpj: "12345678000190".to_string()
            })
        );
        assert_eq!(page.view_id(), ViewId::OperadoraDetails);
    }

    #[test]
    fn test_instantiate_missing_input() {
        let route = Route::new("/operadora/:cnpj", "details", ViewId::OperadoraDetails);
        let err = Page::instantiate(&details_match(&route)).unwrap_err();
        assert_eq!(
            err,
            ViewError::MissingInput {
                view: ViewId::OperadoraDetails,
                input: "cnpj"
            }
        );
    }

    #[test]
    fn test_page_serializes_view_and_props() {
        let page = Page::OperadoraDetails(OperadoraDetails {
            cnpj: "123".to_string(),
        });
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "view": "OperadoraDetails", "props": { "cnpj": "123" } })
        );
    }
}
