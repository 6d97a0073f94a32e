//! Route matching logic.
//!
//! # Responsibilities
//! - Match fully static patterns by direct comparison
//! - Match parameterized patterns segment by segment, binding params
//! - Apply per-route case and trailing-slash options
//!
//! # Design Decisions
//! - Static segments are case-insensitive unless the route is `sensitive`
//! - Parameter values keep their original case and raw (undecoded) text
//! - One trailing slash is tolerated unless the route is `strict`
//! - No regex to guarantee O(n) matching

use crate::routing::pattern::{Params, PathPattern, Segment};

/// Per-route matching options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare static segments case-sensitively.
    pub sensitive: bool,
    /// Reject a trailing slash the pattern does not have.
    pub strict: bool,
}

/// Trait for matching request paths against a compiled pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns the bound parameters if `path` matches.
    fn match_path(&self, path: &str) -> Option<Params>;
}

/// Compile a parsed pattern into the cheapest matcher that handles it.
pub fn compile(pattern: &PathPattern, options: MatchOptions) -> Box<dyn Matcher> {
    if pattern.is_static() {
        Box::new(ExactMatcher::new(pattern.as_str(), options))
    } else {
        Box::new(SegmentMatcher::new(pattern.clone(), options))
    }
}

/// Matches a pattern with no parameters.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
    options: MatchOptions,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>, options: MatchOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }
}

impl Matcher for ExactMatcher {
    fn match_path(&self, path: &str) -> Option<Params> {
        let path = trim_trailing_slash(path, self.options.strict);
        let matched = if self.options.sensitive {
            path == self.path
        } else {
            path.eq_ignore_ascii_case(&self.path)
        };
        matched.then(Params::new)
    }
}

/// Matches a pattern containing parameters.
#[derive(Debug, Clone)]
pub struct SegmentMatcher {
    pattern: PathPattern,
    options: MatchOptions,
}

impl SegmentMatcher {
    pub fn new(pattern: PathPattern, options: MatchOptions) -> Self {
        Self { pattern, options }
    }
}

impl Matcher for SegmentMatcher {
    fn match_path(&self, path: &str) -> Option<Params> {
        let body = trim_trailing_slash(path, self.options.strict).strip_prefix('/')?;
        let parts: Vec<&str> = body.split('/').collect();
        let segments = self.pattern.segments();
        if parts.len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    let equal = if self.options.sensitive {
                        text == part
                    } else {
                        text.eq_ignore_ascii_case(part)
                    };
                    if !equal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

/// Drop a single trailing slash from a non-root path unless `strict`.
fn trim_trailing_slash(path: &str, strict: bool) -> &str {
    if strict || path.len() <= 1 || path.ends_with("//") {
        return path;
    }
    path.strip_suffix('/').unwrap_or(path)
}
