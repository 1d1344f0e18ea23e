use std::time::Duration;

/// Behavior switches for an [`crate::Emitter`], fixed at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Escalate dispatch anomalies to panics instead of logged warnings.
    pub strict: bool,
    /// Report emits whose completion callback has still not run after
    /// `debug_timeout`. A debugging aid for hung listeners, off by default.
    pub debug: bool,
    /// How long the debug check waits before reporting.
    pub debug_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            debug: false,
            debug_timeout: Duration::from_secs(1),
        }
    }
}
