//! Location parsing: split `path?query#hash`.

use serde::Serialize;
use url::form_urlencoded;

/// A navigation target broken into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
}

impl Location {
    /// Parse a location string. Only the query is decoded; the path is
    /// kept verbatim for matching.
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            path: path.to_string(),
            query,
            hash,
        }
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
