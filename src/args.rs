use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::barrier::Done;

/// A single named-argument value, type-erased so one bundle can carry mixed
/// types.
pub type Value = Arc<dyn Any + Send + Sync>;

/// The named-argument bundle supplied to [`crate::Emitter::emit`].
///
/// Values are looked up by name when binding onto a listener's declared
/// parameters. The emitter reserves the names `cb` and `callback` for the
/// per-emit completion signal; anything stored under them is replaced at
/// dispatch.
#[derive(Default, Clone)]
pub struct Args {
    entries: HashMap<String, Value>,
}

impl Args {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Args::insert`].
    #[inline]
    pub fn with(mut self, name: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Any + Send + Sync) {
        self.entries.insert(name.into(), Arc::new(value));
    }

    #[inline]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Typed lookup. `None` when the name is absent or holds another type.
    #[inline]
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.entries.get(name)?.downcast_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Installs the completion signal under both reserved names, backed by
    /// one shared value so either name resolves to the same signal.
    pub(crate) fn install_done(&mut self, done: Done) {
        let value: Value = Arc::new(done);
        self.entries.insert("cb".to_owned(), Arc::clone(&value));
        self.entries.insert("callback".to_owned(), value);
    }
}

impl std::fmt::Debug for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
