use crate::{predicate::Never, rules::Rules, Unless};
use std::{fmt, sync::Arc};
use tower_layer::Layer;

/// Applies a middleware layer unless the request matches a set of [`Rules`].
///
/// For an inner service `S`, the produced [`Unless`] holds two clones of `S`:
/// one wrapped by `L` and one called directly when a rule matches.
pub struct UnlessLayer<L, P = Never> {
    layer: L,
    rules: Arc<Rules<P>>,
}

impl<L, P> UnlessLayer<L, P> {
    /// Creates a new [`UnlessLayer`] around `layer`.
    pub fn new(layer: L, rules: Rules<P>) -> Self {
        UnlessLayer {
            layer,
            rules: Arc::new(rules),
        }
    }

    /// Returns the rules applied by this layer.
    pub fn rules(&self) -> &Rules<P> {
        &self.rules
    }
}

impl<L, P, S> Layer<S> for UnlessLayer<L, P>
where
    L: Layer<S>,
    S: Clone,
{
    type Service = Unless<L::Service, S, P>;

    fn layer(&self, inner: S) -> Self::Service {
        let wrapped = self.layer.layer(inner.clone());
        Unless::with_shared_rules(wrapped, inner, self.rules.clone())
    }
}

impl<L: Clone, P> Clone for UnlessLayer<L, P> {
    fn clone(&self) -> Self {
        UnlessLayer {
            layer: self.layer.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<L: fmt::Debug, P> fmt::Debug for UnlessLayer<L, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnlessLayer")
            .field("layer", &self.layer)
            .field("rules", &self.rules)
            .finish()
    }
}

/// An extension trait that attaches [`Rules`] to a middleware layer.
///
/// ```
/// use std::time::Duration;
/// use tower::timeout::TimeoutLayer;
/// use tower_unless::{Rules, UnlessExt};
///
/// let layer = TimeoutLayer::new(Duration::from_secs(5)).unless(Rules::new().path("/events"));
/// # let _ = layer;
/// ```
pub trait UnlessExt: Sized {
    /// Skips `self` for requests matching `rules`.
    fn unless<P>(self, rules: Rules<P>) -> UnlessLayer<Self, P> {
        UnlessLayer::new(self, rules)
    }

    /// Skips `self` for requests on which `predicate` returns `true`.
    fn unless_fn<F>(self, predicate: F) -> UnlessLayer<Self, F> {
        UnlessLayer::new(self, Rules::from_fn(predicate))
    }
}

impl<L> UnlessExt for L {}
