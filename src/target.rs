use http::{request::Parts, uri::PathAndQuery, Request, Uri};
use std::borrow::Cow;

/// The parts of a request that [`Rules`](crate::Rules) match against.
///
/// Implemented for [`http::Request`] and [`http::request::Parts`]. Other
/// request types can implement it to be used with [`Unless`](crate::Unless).
pub trait RequestTarget {
    /// The current request target, usually the path and query.
    fn url(&self) -> Option<&str>;

    /// The request target before any rewrite, if one was recorded.
    fn original_url(&self) -> Option<&str>;

    /// The request method.
    fn method(&self) -> Option<&str>;
}

/// The request URI as received, before any rewrite.
///
/// Whatever rewrites a request's URI should insert this into the request
/// extensions so that `use_original_url` rules can see the original target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalUri(pub Uri);

fn target_of(uri: &Uri) -> Option<&str> {
    uri.path_and_query().map(PathAndQuery::as_str)
}

impl<B> RequestTarget for Request<B> {
    fn url(&self) -> Option<&str> {
        target_of(self.uri())
    }

    fn original_url(&self) -> Option<&str> {
        self.extensions()
            .get::<OriginalUri>()
            .and_then(|original| target_of(&original.0))
    }

    fn method(&self) -> Option<&str> {
        Some(Request::method(self).as_str())
    }
}

impl RequestTarget for Parts {
    fn url(&self) -> Option<&str> {
        target_of(&self.uri)
    }

    fn original_url(&self) -> Option<&str> {
        self.extensions
            .get::<OriginalUri>()
            .and_then(|original| target_of(&original.0))
    }

    fn method(&self) -> Option<&str> {
        Some(self.method.as_str())
    }
}

impl<T: RequestTarget + ?Sized> RequestTarget for &T {
    fn url(&self) -> Option<&str> {
        (**self).url()
    }

    fn original_url(&self) -> Option<&str> {
        (**self).original_url()
    }

    fn method(&self) -> Option<&str> {
        (**self).method()
    }
}

/// Extracts the path component of a request target.
///
/// Absolute-form targets go through [`Uri`]. Everything else is cut at the
/// first `?` or `#` and otherwise kept verbatim.
pub(crate) fn path_of(url: &str) -> Option<Cow<'_, str>> {
    if url.is_empty() {
        return None;
    }

    if !url.starts_with('/') {
        if let Ok(uri) = url.parse::<Uri>() {
            if uri.scheme().is_some() {
                return Some(Cow::Owned(uri.path().to_owned()));
            }
        }
    }

    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    Some(Cow::Borrowed(&url[..end]))
}
