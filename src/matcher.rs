use crate::error::PatternError;
use regex::Regex;
use std::fmt;

/// A single entry of a path rule.
#[derive(Clone)]
pub enum PathMatcher {
    /// Matches when the request path is exactly this string.
    Literal(String),
    /// Matches when the pattern is found anywhere in the request path.
    ///
    /// The search is not anchored; use `^` and `$` in the pattern to anchor
    /// it.
    Pattern(Regex),
}

impl PathMatcher {
    /// Creates a matcher for exactly `path`.
    pub fn literal(path: impl Into<String>) -> Self {
        PathMatcher::Literal(path.into())
    }

    /// Compiles `pattern` into a matcher.
    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        Regex::new(pattern)
            .map(PathMatcher::Pattern)
            .map_err(|e| PatternError::new(pattern, e))
    }

    /// Tests the matcher against a request path.
    pub fn is_match(&self, path: &str) -> bool {
        match self {
            PathMatcher::Literal(literal) => literal == path,
            PathMatcher::Pattern(re) => re.is_match(path),
        }
    }
}

impl From<&str> for PathMatcher {
    fn from(path: &str) -> Self {
        PathMatcher::literal(path)
    }
}

impl From<String> for PathMatcher {
    fn from(path: String) -> Self {
        PathMatcher::Literal(path)
    }
}

impl From<Regex> for PathMatcher {
    fn from(re: Regex) -> Self {
        PathMatcher::Pattern(re)
    }
}

impl fmt::Debug for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMatcher::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            PathMatcher::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
        }
    }
}
