use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::args::Args;
use crate::barrier::Barrier;
use crate::binder::bind;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::listener::Listener;

/// Identifies one registration on an [`Emitter`].
///
/// Returned by [`Emitter::on`] and [`Emitter::once`], accepted by
/// [`Emitter::off`]. Registering an equivalent listener twice yields two
/// distinct ids, each removable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone)]
struct Entry {
    id: ListenerId,
    once: bool,
    listener: Arc<dyn Listener>,
}

struct Inner {
    config: Config,
    next_id: AtomicU64,
    registry: Mutex<HashMap<String, Vec<Entry>>>,
}

/// An event emitter whose listeners complete asynchronously.
///
/// Listeners register under a string event name and keep their registration
/// order. [`Emitter::emit`] dispatches every listener for an event with
/// arguments bound by name, then delivers a single completion callback once
/// each listener has signaled [`crate::Done`]. Clones share the same
/// listener registry.
#[derive(Clone)]
pub struct Emitter {
    inner: Arc<Inner>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                next_id: AtomicU64::new(0),
                registry: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Appends `listener` to the event's sequence.
    pub fn on(&self, event: impl Into<String>, listener: impl Listener) -> ListenerId {
        self.register(event.into(), false, Arc::new(listener))
    }

    /// As [`Emitter::on`], but the registration is dropped when the event is
    /// next emitted, so the listener runs at most once.
    pub fn once(&self, event: impl Into<String>, listener: impl Listener) -> ListenerId {
        self.register(event.into(), true, Arc::new(listener))
    }

    fn register(&self, event: String, once: bool, listener: Arc<dyn Listener>) -> ListenerId {
        let id = ListenerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.registry()
            .entry(event)
            .or_default()
            .push(Entry { id, once, listener });
        id
    }

    /// Removes the registration `id` from the event's sequence.
    ///
    /// Errors with [`Error::UnknownListener`] when `id` is not currently
    /// registered there; an event that was never registered holds an empty
    /// sequence and errors the same way.
    pub fn off(&self, event: &str, id: ListenerId) -> Result<()> {
        let mut registry = self.registry();
        let entries = registry
            .get_mut(event)
            .filter(|entries| entries.iter().any(|entry| entry.id == id))
            .ok_or_else(|| Error::UnknownListener(event.to_owned()))?;
        entries.retain(|entry| entry.id != id);
        Ok(())
    }

    /// Clears the event's sequence. A no-op for an unregistered event.
    pub fn off_all(&self, event: &str) {
        if let Some(entries) = self.registry().get_mut(event) {
            entries.clear();
        }
    }

    /// Number of listeners currently registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.registry().get(event).map_or(0, Vec::len)
    }

    /// Fires `event`, invoking every registered listener in registration
    /// order, and runs `on_complete` exactly once after all of them have
    /// signaled completion.
    ///
    /// Each listener's parameters are filled from `args` by declared name;
    /// the per-emit [`crate::Done`] signal is bound under the reserved names
    /// `cb` and `callback`. The synchronous part of each listener runs
    /// before `emit` returns, the future it produces is spawned onto the
    /// current Tokio runtime, and `emit` itself never suspends. An event
    /// with no listeners completes immediately.
    ///
    /// # Panics
    ///
    /// Panics when a listener signals completion more often than listeners
    /// were dispatched, or, under [`Config::strict`], when one signals while
    /// dispatch is still in progress. Panics outside a Tokio runtime if
    /// there are listener futures or diagnostics to spawn.
    pub fn emit(&self, event: &str, mut args: Args, on_complete: impl FnOnce() + Send + 'static) {
        let snapshot = {
            let mut registry = self.registry();
            match registry.get_mut(event) {
                Some(entries) => {
                    let snapshot = entries.clone();
                    entries.retain(|entry| !entry.once);
                    snapshot
                }
                None => Vec::new(),
            }
        };

        let barrier = Barrier::new(
            event,
            snapshot.len(),
            self.inner.config.strict,
            Box::new(on_complete),
        );
        args.install_done(barrier.done());

        if snapshot.is_empty() {
            barrier.finish();
        } else {
            barrier.begin_dispatch();
            for entry in &snapshot {
                let bound = bind(entry.listener.params(), &args);
                tokio::spawn(entry.listener.handle(bound));
            }
        }

        if self.inner.config.debug {
            barrier.watch(self.inner.config.debug_timeout);
        }
        barrier.end_dispatch();
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<String, Vec<Entry>>> {
        self.inner.registry.lock().expect("listener registry poisoned")
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
