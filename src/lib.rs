#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unreachable_pub
)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Conditionally bypass a middleware layer.
//!
//! [`Unless`] sits where a middleware's service would be and, for each
//! request, either calls that middleware or skips straight to the service it
//! wraps. The decision is made by [`Rules`]: a custom predicate, path
//! literals and patterns, filename extensions and methods, checked in that
//! order. The first rule that matches sends the request around the
//! middleware.
//!
//! # Example
//!
//! ```
//! use http::{Request, Response};
//! use std::convert::Infallible;
//! use tower::{service_fn, util::MapResponseLayer, ServiceBuilder, ServiceExt};
//! use tower_unless::{Rules, UnlessExt};
//!
//! # tokio_test::block_on(async {
//! let tag = MapResponseLayer::new(|res: Response<&'static str>| {
//!     let (mut parts, body) = res.into_parts();
//!     parts.headers.insert("x-tagged", "1".parse().unwrap());
//!     Response::from_parts(parts, body)
//! });
//!
//! let svc = ServiceBuilder::new()
//!     .layer(tag.unless(Rules::new().path("/health").ext(".css")))
//!     .service(service_fn(|_: Request<()>| async {
//!         Ok::<_, Infallible>(Response::new("ok"))
//!     }));
//!
//! let res = svc
//!     .clone()
//!     .oneshot(Request::get("/health").body(()).unwrap())
//!     .await
//!     .unwrap();
//! assert!(!res.headers().contains_key("x-tagged"));
//!
//! let res = svc
//!     .oneshot(Request::get("/users").body(()).unwrap())
//!     .await
//!     .unwrap();
//! assert!(res.headers().contains_key("x-tagged"));
//! # });
//! ```

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod config;
pub mod error;
pub mod future;
mod layer;
mod matcher;
mod predicate;
mod rules;
mod target;

#[cfg(feature = "serde")]
pub use crate::config::UnlessConfig;
pub use crate::{
    layer::{UnlessExt, UnlessLayer},
    matcher::PathMatcher,
    predicate::{Never, Predicate},
    rules::{Rule, Rules},
    target::{OriginalUri, RequestTarget},
};

use crate::{error::BoxError, future::ResponseFuture};
use std::{
    fmt,
    sync::Arc,
    task::{Context, Poll},
};
use tower_service::Service;

/// Calls the wrapped service unless the request matches the [`Rules`], in
/// which case the next service is called instead.
///
/// Because the choice is only known once a request arrives, [`poll_ready`]
/// waits for both services to be ready.
///
/// [`poll_ready`]: Service::poll_ready
pub struct Unless<W, N, P = Never> {
    wrapped: W,
    next: N,
    rules: Arc<Rules<P>>,
}

// ===== impl Unless =====

impl<W, N, P> Unless<W, N, P> {
    /// Creates a new [`Unless`].
    ///
    /// `wrapped` is usually a middleware around a clone of `next`.
    pub fn new(wrapped: W, next: N, rules: Rules<P>) -> Self {
        Unless::with_shared_rules(wrapped, next, Arc::new(rules))
    }

    pub(crate) fn with_shared_rules(wrapped: W, next: N, rules: Arc<Rules<P>>) -> Self {
        Unless {
            wrapped,
            next,
            rules,
        }
    }

    /// Get a reference to the wrapped service.
    pub fn get_ref(&self) -> &W {
        &self.wrapped
    }

    /// Get a reference to the next service.
    pub fn next_ref(&self) -> &N {
        &self.next
    }

    /// Returns the rules deciding which service handles a request.
    pub fn rules(&self) -> &Rules<P> {
        &self.rules
    }

    /// Consume `self`, returning the wrapped and next services.
    pub fn into_inner(self) -> (W, N) {
        (self.wrapped, self.next)
    }
}

impl<W, N, P, Request> Service<Request> for Unless<W, N, P>
where
    W: Service<Request>,
    W::Error: Into<BoxError>,
    N: Service<Request, Response = W::Response>,
    N::Error: Into<BoxError>,
    P: Predicate<Request>,
    Request: RequestTarget,
{
    type Response = W::Response;
    type Error = BoxError;
    type Future = ResponseFuture<W::Future, N::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Either service may get the next request, so both must be ready.
        let wrapped = self.wrapped.poll_ready(cx).map_err(Into::<BoxError>::into)?;
        let next = self.next.poll_ready(cx).map_err(Into::<BoxError>::into)?;
        if wrapped.is_pending() || next.is_pending() {
            return Poll::Pending;
        }
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request) -> Self::Future {
        match self.rules.matching(&request) {
            Some(rule) => {
                tracing::trace!(%rule, "skipping wrapped service");
                ResponseFuture::skipped(self.next.call(request))
            }
            None => {
                tracing::trace!("calling wrapped service");
                ResponseFuture::wrapped(self.wrapped.call(request))
            }
        }
    }
}

impl<W: Clone, N: Clone, P> Clone for Unless<W, N, P> {
    fn clone(&self) -> Self {
        Unless {
            wrapped: self.wrapped.clone(),
            next: self.next.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<W: fmt::Debug, N: fmt::Debug, P> fmt::Debug for Unless<W, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unless")
            .field("wrapped", &self.wrapped)
            .field("next", &self.next)
            .field("rules", &self.rules)
            .finish()
    }
}
