//! Error types

use std::{error, fmt};

/// Alias for a type-erased error type.
///
/// Errors from both the wrapped service and the next service are converted
/// into this type by [`Unless`](crate::Unless).
pub type BoxError = Box<dyn error::Error + Send + Sync>;

/// Error returned when a path pattern fails to compile.
pub struct PatternError {
    pattern: String,
    source: regex::Error,
}

impl PatternError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        PatternError {
            pattern: pattern.to_owned(),
            source,
        }
    }

    /// Returns the pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Debug for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternError")
            .field("pattern", &self.pattern)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid path pattern `{}`", self.pattern)
    }
}

impl error::Error for PatternError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}
