use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Misuse conditions surfaced by the emitter.
///
/// `UnknownListener` is returned as an `Err` from [`crate::Emitter::off`].
/// The completion-protocol variants describe listener bugs; they are raised
/// as panics from within the completion signal, since the code that
/// triggered them is in no position to recover.
#[derive(Debug, Error)]
pub enum Error {
    /// The listener id was never registered for this event.
    #[error("listener is not registered for event `{0}`")]
    UnknownListener(String),

    /// The completion callback for an emit was about to run a second time.
    #[error("completion callback already invoked for event `{0}`")]
    DuplicateCompletion(String),

    /// More completion signals arrived than listeners were dispatched.
    #[error("more completion signals than listeners for event `{0}`")]
    ExcessCompletion(String),

    /// A listener signaled completion while dispatch was still in progress.
    #[error("completion signaled synchronously during dispatch of event `{0}`")]
    SyncCompletion(String),
}
