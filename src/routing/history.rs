//! Clean-path web history.
//!
//! # Responsibilities
//! - Normalize the deploy-time base path
//! - Strip the base from incoming locations
//! - Prefix the base onto outgoing hrefs
//!
//! # Design Decisions
//! - No hash-fragment prefix: addresses look like `/app/operadora/123`
//! - Base comparison is ASCII case-insensitive and stops at a segment
//!   boundary, so `/app` never claims `/application`
//! - A location outside the base is not routable

use url::Url;

/// Clean-path history scoped under a base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
}

impl WebHistory {
    /// Create a history rooted at `base_path` (normalized).
    pub fn new(base_path: &str) -> Self {
        Self {
            base: normalize_base(base_path),
        }
    }

    /// The normalized base: empty for the root, otherwise `/segment...`
    /// without a trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Strip the base from an address path, returning the app-relative path.
    pub fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }

        let head = path.get(..self.base.len())?;
        if !head.eq_ignore_ascii_case(&self.base) {
            return None;
        }

        match &path[self.base.len()..] {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }

    /// Full address for an app-relative location.
    pub fn href(&self, location: &str) -> String {
        format!("{}{}", self.base, location)
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Normalize a base path as supplied by the build environment.
///
/// `https://cdn.example.com/app/` → `/app`, `app/` → `/app`, `/` → ``.
pub fn normalize_base(raw: &str) -> String {
    let raw = raw.trim();

    // Absolute URL bases keep only their path
    let path = match Url::parse(raw) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => raw.to_string(),
    };

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
