//! Future types

use crate::error::BoxError;
use futures_core::ready;
use pin_project_lite::pin_project;
use std::{
    fmt,
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

pin_project! {
    /// Response future for [`Unless`](crate::Unless).
    ///
    /// Resolves to the response of whichever service handled the request.
    pub struct ResponseFuture<W, N> {
        #[pin]
        kind: Kind<W, N>,
    }
}

pin_project! {
    #[project = KindProj]
    enum Kind<W, N> {
        Wrapped { #[pin] future: W },
        Skipped { #[pin] future: N },
    }
}

impl<W, N> ResponseFuture<W, N> {
    pub(crate) fn wrapped(future: W) -> Self {
        ResponseFuture {
            kind: Kind::Wrapped { future },
        }
    }

    pub(crate) fn skipped(future: N) -> Self {
        ResponseFuture {
            kind: Kind::Skipped { future },
        }
    }

    /// Returns `true` if the request bypassed the wrapped service.
    pub fn is_skipped(&self) -> bool {
        matches!(self.kind, Kind::Skipped { .. })
    }
}

impl<W, N, T, E1, E2> Future for ResponseFuture<W, N>
where
    W: Future<Output = Result<T, E1>>,
    N: Future<Output = Result<T, E2>>,
    E1: Into<BoxError>,
    E2: Into<BoxError>,
{
    type Output = Result<T, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().kind.project() {
            KindProj::Wrapped { future } => {
                Poll::Ready(ready!(future.poll(cx)).map_err(Into::into))
            }
            KindProj::Skipped { future } => {
                Poll::Ready(ready!(future.poll(cx)).map_err(Into::into))
            }
        }
    }
}

impl<W, N> fmt::Debug for ResponseFuture<W, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_skipped() { "Skipped" } else { "Wrapped" };
        f.debug_tuple("ResponseFuture").field(&kind).finish()
    }
}
