#![allow(dead_code)]

use http::{Request, Uri};
use tower_unless::OriginalUri;

pub(crate) fn trace_init() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .with_thread_names(true)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

pub(crate) fn request(method: &str, uri: &str) -> Request<()> {
    Request::builder().method(method).uri(uri).body(()).unwrap()
}

pub(crate) fn get(uri: &str) -> Request<()> {
    request("GET", uri)
}

/// A request whose target was rewritten from `original` to `current`.
pub(crate) fn rewritten(original: &'static str, current: &str) -> Request<()> {
    let mut req = get(current);
    req.extensions_mut()
        .insert(OriginalUri(Uri::from_static(original)));
    req
}
