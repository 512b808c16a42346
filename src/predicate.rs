/// Decides whether a request should skip the wrapped service.
///
/// Implemented for every `Fn(&Request) -> bool`, so a closure can be passed
/// wherever a predicate is expected.
pub trait Predicate<Request> {
    /// Returns `true` if the request should bypass the wrapped service.
    fn matches(&self, request: &Request) -> bool;
}

impl<F, Request> Predicate<Request> for F
where
    F: Fn(&Request) -> bool,
{
    fn matches(&self, request: &Request) -> bool {
        self(request)
    }
}

/// A [`Predicate`] that never matches.
///
/// This is the custom predicate of [`Rules`](crate::Rules) until one is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never {
    _p: (),
}

impl<Request> Predicate<Request> for Never {
    fn matches(&self, _: &Request) -> bool {
        false
    }
}
