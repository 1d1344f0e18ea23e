mod from_fn;

pub use from_fn::*;

use crate::binder::{Bound, ParamName};
use futures::future::BoxFuture;

/// A registered callback for one event name.
///
/// `handle` receives the arguments already bound into the order given by
/// [`Listener::params`]. Its body runs inline during dispatch; the returned
/// future carries the asynchronous remainder of the work and is spawned by
/// the emitter. However the work is scheduled, it reports through the
/// [`crate::Done`] signal bound under `cb` or `callback`.
pub trait Listener: Send + Sync + 'static {
    /// Declared parameter names, in declaration order.
    fn params(&self) -> &[ParamName];

    /// Handles one dispatch of the event.
    fn handle(&self, args: Bound) -> BoxFuture<'static, ()>;
}
