use crossbeam_utils::CachePadded;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::Error;

type OnComplete = Box<dyn FnOnce() + Send + 'static>;

struct Inner {
    event: String,
    strict: bool,
    pending: CachePadded<AtomicI64>,
    completed: AtomicBool,
    dispatching: AtomicBool,
    on_complete: Mutex<Option<OnComplete>>,
}

impl Inner {
    fn signal(&self) {
        if self.dispatching.load(Ordering::Acquire) {
            let anomaly = Error::SyncCompletion(self.event.clone());
            if self.strict {
                panic!("{anomaly}");
            }
            tracing::warn!(event = %self.event, "{anomaly}");
        }

        let left = self.pending.fetch_sub(1, Ordering::AcqRel) - 1;
        if left == 0 {
            self.finish();
        } else if left < 0 {
            panic!("{}", Error::ExcessCompletion(self.event.clone()));
        }
    }

    fn finish(&self) {
        if self.completed.swap(true, Ordering::AcqRel) {
            panic!("{}", Error::DuplicateCompletion(self.event.clone()));
        }

        let on_complete = self
            .on_complete
            .lock()
            .expect("completion slot poisoned")
            .take();
        if let Some(on_complete) = on_complete {
            on_complete();
        }
    }
}

/// Counts one expected completion per dispatched listener and runs the
/// stored completion callback exactly once when the count reaches zero.
pub(crate) struct Barrier {
    inner: Arc<Inner>,
}

impl Barrier {
    pub(crate) fn new(event: &str, count: usize, strict: bool, on_complete: OnComplete) -> Self {
        Self {
            inner: Arc::new(Inner {
                event: event.to_owned(),
                strict,
                pending: CachePadded::new(AtomicI64::new(count as i64)),
                completed: AtomicBool::new(false),
                dispatching: AtomicBool::new(false),
                on_complete: Mutex::new(Some(on_complete)),
            }),
        }
    }

    pub(crate) fn done(&self) -> Done {
        Done(Arc::clone(&self.inner))
    }

    pub(crate) fn begin_dispatch(&self) {
        self.inner.dispatching.store(true, Ordering::Release);
    }

    pub(crate) fn end_dispatch(&self) {
        self.inner.dispatching.store(false, Ordering::Release);
    }

    /// Immediate completion for a dispatch with nothing pending.
    pub(crate) fn finish(&self) {
        self.inner.finish();
    }

    /// Spawns the delayed debug check.
    pub(crate) fn watch(&self, timeout: Duration) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            if !inner.completed.load(Ordering::Acquire) {
                tracing::warn!(
                    event = %inner.event,
                    ?timeout,
                    "completion callback still pending",
                );
            }
        });
    }
}

/// Completion signal handed to every listener of one emit.
///
/// Each listener invocation is expected to call [`Done::signal`] exactly once
/// when its work is finished, however that work is scheduled. Signaling more
/// times than listeners were dispatched is a bug in the calling listener and
/// panics.
#[derive(Clone)]
pub struct Done(Arc<Inner>);

impl Done {
    pub fn signal(&self) {
        self.0.signal();
    }
}

impl std::fmt::Debug for Done {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Done")
            .field("event", &self.0.event)
            .field("pending", &self.0.pending.load(Ordering::Relaxed))
            .finish()
    }
}
