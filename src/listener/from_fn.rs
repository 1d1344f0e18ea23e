use futures::FutureExt;
use futures::future::BoxFuture;

use crate::binder::{Bound, ParamName};
use crate::listener::Listener;

pub struct FromFn<F> {
    params: Vec<ParamName>,
    f: F,
}

impl<F> FromFn<F> {
    #[inline]
    pub fn new(params: &[&str], f: F) -> Self {
        Self {
            params: params.iter().copied().map(ParamName::new).collect(),
            f,
        }
    }
}

impl<F, Fut> Listener for FromFn<F>
where
    F: Fn(Bound) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    #[inline]
    fn params(&self) -> &[ParamName] {
        &self.params
    }

    #[inline]
    fn handle(&self, args: Bound) -> BoxFuture<'static, ()> {
        (self.f)(args).boxed()
    }
}

/// Adapts a closure into a [`Listener`] with the given declared parameter
/// names.
#[inline]
pub fn from_fn<F>(params: &[&str], f: F) -> FromFn<F>
where
    FromFn<F>: Listener,
{
    FromFn::new(params, f)
}
