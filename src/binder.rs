use std::any::Any;

use crate::args::{Args, Value};

/// A declared formal parameter name of a listener.
///
/// Names are recorded at listener construction, in declaration order.
/// Underscore-wrapped input (`_name_`) is stored bare, so bundle lookup
/// always uses the plain identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamName(String);

impl ParamName {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        let bare = if trimmed.len() > 2 && trimmed.starts_with('_') && trimmed.ends_with('_') {
            &trimmed[1..trimmed.len() - 1]
        } else {
            trimmed
        };
        Self(bare.to_owned())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParamName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for ParamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arguments bound into a listener's declared parameter order.
///
/// Slot `i` holds the bundle value for the listener's `i`-th declared
/// parameter, or nothing when the bundle had no value under that name.
#[derive(Debug, Clone)]
pub struct Bound {
    slots: Vec<Option<Value>>,
}

impl Bound {
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value at `index`; `None` for an unfilled slot or one out of range.
    #[inline]
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.slots.get(index)?.as_ref()
    }

    /// Typed access to the value at `index`.
    #[inline]
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.value(index)?.downcast_ref()
    }
}

/// Maps `args` onto `params`, preserving the declared order.
///
/// Parameter names absent from the bundle leave their slot unfilled; bundle
/// keys matching no declared parameter are ignored.
pub fn bind(params: &[ParamName], args: &Args) -> Bound {
    Bound {
        slots: params
            .iter()
            .map(|name| args.value(name.as_str()).cloned())
            .collect(),
    }
}
