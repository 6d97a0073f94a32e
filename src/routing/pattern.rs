//! Route pattern parsing.
//!
//! # Responsibilities
//! - Parse patterns like `/operadora/:cnpj` into typed segments
//! - Build a concrete path from named parameter values
//!
//! # Design Decisions
//! - A segment starting with `:` is a parameter, anything else is static
//! - Patterns are validated once, when the route table is built
//! - Parameter values are substituted verbatim (no percent-encoding), so a
//!   built path resolves back to the exact same values
//! - Values containing `/`, `?` or `#` are rejected: the location parser
//!   would split them off the path

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Named parameter values extracted from (or substituted into) a path.
pub type Params = BTreeMap<String, String>;

/// One `/`-separated piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must appear in the path.
    Static(String),
    /// Named placeholder binding one non-empty path segment.
    Param(String),
}

/// Errors raised while parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),

    #[error("pattern {0:?} has an empty segment")]
    EmptySegment(String),

    #[error("pattern {0:?} must not end with '/'")]
    TrailingSlash(String),

    #[error("pattern {pattern:?} has invalid parameter name {name:?}")]
    InvalidParamName { pattern: String, name: String },

    #[error("pattern {pattern:?} declares parameter {name:?} more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// Errors raised while substituting parameters into a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("missing required param {0:?}")]
    Missing(String),

    #[error("param {name:?} has value {value:?}, which is not a single non-empty path segment")]
    Invalid { name: String, value: String },
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let body = raw
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(raw.to_string()))?;

        // Root pattern has no segments
        if body.is_empty() {
            return Ok(Self {
                raw: raw.to_string(),
                segments: Vec::new(),
            });
        }

        if body.ends_with('/') {
            return Err(PatternError::TrailingSlash(raw.to_string()));
        }

        let mut segments = Vec::new();
        for part in body.split('/') {
            if part.is_empty() {
                return Err(PatternError::EmptySegment(raw.to_string()));
            }

            match part.strip_prefix(':') {
                Some(name) => {
                    if !is_valid_param_name(name) {
                        return Err(PatternError::InvalidParamName {
                            pattern: raw.to_string(),
                            name: name.to_string(),
                        });
                    }
                    if segments.contains(&Segment::Param(name.to_string())) {
                        return Err(PatternError::DuplicateParam {
                            pattern: raw.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the pattern has no parameters.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Static(_)))
    }

    /// Names of all parameters, in pattern order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Build a path by substituting `params` into the pattern.
    ///
    /// Parameters the pattern does not declare are ignored; callers decide
    /// whether that deserves a warning.
    pub fn build(&self, params: &Params) -> Result<String, ParamError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| ParamError::Missing(name.clone()))?;
                    if value.is_empty() || value.contains(['/', '?', '#']) {
                        return Err(ParamError::Invalid {
                            name: name.clone(),
                            value: value.clone(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
