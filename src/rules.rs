use crate::{
    matcher::PathMatcher,
    predicate::{Never, Predicate},
    target::{path_of, RequestTarget},
};
use std::fmt;

/// The rule that caused a request to bypass the wrapped service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The custom predicate returned `true`.
    Custom,
    /// The request path matched a path entry.
    Path,
    /// The request path ended with an extension entry.
    Extension,
    /// The request method equals a method entry.
    Method,
}

impl Rule {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Rule::Custom => "custom",
            Rule::Path => "path",
            Rule::Extension => "extension",
            Rule::Method => "method",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The conditions under which a request bypasses the wrapped service.
///
/// Rules are checked in a fixed order (custom predicate, path, extension,
/// method) and the first one that matches wins. A rule with no entries never
/// matches, so `Rules::new()` sends every request to the wrapped service.
///
/// # Example
///
/// ```
/// use http::Request;
/// use tower_unless::{PathMatcher, Rule, Rules};
///
/// let rules = Rules::new()
///     .paths(["/login", "/logout"])
///     .path(PathMatcher::pattern("^/public/").unwrap())
///     .ext(".css")
///     .method("OPTIONS");
///
/// let req = Request::get("/assets/app.css?v=2").body(()).unwrap();
/// assert_eq!(rules.matching(&req), Some(Rule::Extension));
///
/// let req = Request::get("/profile").body(()).unwrap();
/// assert_eq!(rules.matching(&req), None);
/// ```
#[derive(Clone)]
pub struct Rules<P = Never> {
    custom: Option<P>,
    paths: Vec<PathMatcher>,
    exts: Vec<String>,
    methods: Vec<String>,
    use_original_url: bool,
}

impl Rules {
    /// Creates an empty set of rules that matches no request.
    pub fn new() -> Self {
        Rules {
            custom: None,
            paths: Vec::new(),
            exts: Vec::new(),
            methods: Vec::new(),
            use_original_url: false,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::new()
    }
}

impl<P> Rules<P> {
    /// Creates rules that only consult `predicate`.
    ///
    /// Equivalent to `Rules::new().custom(predicate)`.
    pub fn from_fn(predicate: P) -> Self {
        Rules::new().custom(predicate)
    }

    /// Sets the custom predicate, replacing any previous one.
    pub fn custom<Q>(self, predicate: Q) -> Rules<Q> {
        Rules {
            custom: Some(predicate),
            paths: self.paths,
            exts: self.exts,
            methods: self.methods,
            use_original_url: self.use_original_url,
        }
    }

    /// Adds a path entry.
    ///
    /// Strings match the request path exactly; a [`Regex`](regex::Regex)
    /// matches anywhere in it.
    pub fn path(mut self, matcher: impl Into<PathMatcher>) -> Self {
        self.paths.push(matcher.into());
        self
    }

    /// Adds several path entries.
    pub fn paths<I>(mut self, matchers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathMatcher>,
    {
        self.paths.extend(matchers.into_iter().map(Into::into));
        self
    }

    /// Adds an extension entry, such as `".json"`.
    ///
    /// The entry is compared against the end of the request path as is:
    /// no dot or segment boundary is required, so `"son"` matches
    /// `/report.json`. An empty entry never matches.
    pub fn ext(mut self, ext: impl Into<String>) -> Self {
        self.exts.push(ext.into());
        self
    }

    /// Adds several extension entries.
    pub fn exts<I>(mut self, exts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exts.extend(exts.into_iter().map(Into::into));
        self
    }

    /// Adds a method entry. Methods are compared case-sensitively.
    pub fn method(mut self, method: impl AsRef<str>) -> Self {
        self.methods.push(method.as_ref().to_owned());
        self
    }

    /// Adds several method entries.
    pub fn methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.methods
            .extend(methods.into_iter().map(|m| m.as_ref().to_owned()));
        self
    }

    /// Match paths and extensions against the original request target
    /// instead of the current one.
    pub fn use_original_url(mut self, enabled: bool) -> Self {
        self.use_original_url = enabled;
        self
    }

    /// Returns the first rule that matches `request`, if any.
    pub fn matching<R>(&self, request: &R) -> Option<Rule>
    where
        R: RequestTarget,
        P: Predicate<R>,
    {
        if self.matches_custom(request) {
            return Some(Rule::Custom);
        }

        let url = if self.use_original_url {
            request.original_url()
        } else {
            request.url()
        };
        let path = url.and_then(path_of);

        if let Some(path) = path.as_deref() {
            if self.matches_path(path) {
                return Some(Rule::Path);
            }
            if self.matches_extension(path) {
                return Some(Rule::Extension);
            }
        }

        if self.matches_method(request.method()) {
            return Some(Rule::Method);
        }

        None
    }

    /// Returns `true` if any rule matches `request`.
    pub fn is_match<R>(&self, request: &R) -> bool
    where
        R: RequestTarget,
        P: Predicate<R>,
    {
        self.matching(request).is_some()
    }

    fn matches_custom<R>(&self, request: &R) -> bool
    where
        P: Predicate<R>,
    {
        self.custom
            .as_ref()
            .map_or(false, |custom| custom.matches(request))
    }

    fn matches_path(&self, path: &str) -> bool {
        self.paths.iter().any(|m| m.is_match(path))
    }

    fn matches_extension(&self, path: &str) -> bool {
        self.exts
            .iter()
            .any(|ext| !ext.is_empty() && path.ends_with(ext.as_str()))
    }

    fn matches_method(&self, method: Option<&str>) -> bool {
        match method {
            Some(method) => self.methods.iter().any(|m| m == method),
            None => false,
        }
    }
}

impl<P> fmt::Debug for Rules<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field(
                "custom",
                &self.custom.as_ref().map(|_| std::any::type_name::<P>()),
            )
            .field("paths", &self.paths)
            .field("exts", &self.exts)
            .field("methods", &self.methods)
            .field("use_original_url", &self.use_original_url)
            .finish()
    }
}
