//! Shared helpers for integration tests.

use std::sync::Arc;

use operadora_router::config::schema::default_routes;
use operadora_router::routing::Params;
use operadora_router::{Navigator, RouteTable, WebHistory};

/// The application's declared route table.
pub fn app_table() -> Arc<RouteTable> {
    Arc::new(RouteTable::from_config(&default_routes()).unwrap())
}

/// A navigator over the declared routes under `base`.
#[allow(dead_code)]
pub fn navigator(base: &str) -> Navigator {
    Navigator::new(app_table(), WebHistory::new(base))
}

/// Build a param map from pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
