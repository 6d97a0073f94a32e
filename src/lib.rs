//! Route table for the operadoras single-page app.
//!
//! Declares the app's routes (`/` → `HomeView`,
//! `/operadora/:cnpj` → `OperadoraDetails`), resolves locations to views
//! with their bound props, builds addresses for named navigation under a
//! configurable base path, and hosts deep links over HTTP.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod shell;
pub mod views;

pub use config::RouterConfig;
pub use http::ShellServer;
pub use routing::{Route, RouteMatch, RouteTable, WebHistory};
pub use shell::{Navigator, Outcome};
pub use views::{Page, ViewId};
