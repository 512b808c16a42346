//! Declarative rule sets.
//!
//! [`UnlessConfig`] deserializes the non-custom part of [`Rules`] from a
//! configuration file. Every field is optional and takes either a single
//! value or a list:
//!
//! ```toml
//! path = ["/login", { pattern = "^/public/" }]
//! ext = ".css"
//! method = ["GET", "HEAD"]
//! use_original_url = true
//! ```

use crate::{error::PatternError, matcher::PathMatcher, rules::Rules};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// A value given either on its own or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// A single value.
    One(T),
    /// A list of values, in order.
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    /// Returns the values as a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// A path entry: a literal path or a `{ pattern = "..." }` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PathEntry {
    /// Matches the request path exactly.
    Literal(String),
    /// Regular expression searched for in the request path.
    Pattern {
        /// The expression source.
        pattern: String,
    },
}

/// Serializable form of [`Rules`] without a custom predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UnlessConfig {
    /// Path entries.
    pub path: OneOrMany<PathEntry>,

    /// Extension entries such as `".json"`.
    pub ext: OneOrMany<String>,

    /// Method entries, compared case-sensitively.
    pub method: OneOrMany<String>,

    /// Match paths against the original request target.
    pub use_original_url: bool,
}

impl UnlessConfig {
    /// Compiles the configuration into [`Rules`].
    ///
    /// Fails if a path pattern is not a valid regular expression.
    pub fn into_rules(self) -> Result<Rules, PatternError> {
        let paths = self
            .path
            .into_vec()
            .into_iter()
            .map(|entry| match entry {
                PathEntry::Literal(path) => Ok(PathMatcher::Literal(path)),
                PathEntry::Pattern { pattern } => PathMatcher::pattern(&pattern),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rules::new()
            .paths(paths)
            .exts(self.ext.into_vec())
            .methods(self.method.into_vec())
            .use_original_url(self.use_original_url))
    }
}

impl TryFrom<UnlessConfig> for Rules {
    type Error = PatternError;

    fn try_from(config: UnlessConfig) -> Result<Self, Self::Error> {
        config.into_rules()
    }
}
