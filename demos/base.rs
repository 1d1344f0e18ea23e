//! Core emitter functionality: registration, one-shot listeners, and
//! tracked completion.
//!
//! This example shows the simplest usage of evoke:
//! 1. Initializing the Emitter.
//! 2. Binding listeners with `on` and `once`.
//! 3. Emitting an event and waiting for its completion callback.
use evoke::{Args, Bound, Done, Emitter, from_fn};
use std::time::Duration;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() {
    // 1. Initialize the Emitter
    let emitter = Emitter::new();

    // 2. Bind a continuous listener and a one-shot listener
    emitter.on(
        "user-action",
        from_fn(&["cb"], |args: Bound| async move {
            println!("[listener] handling user action");
            tokio::time::sleep(Duration::from_millis(10)).await;
            args.get::<Done>(0).unwrap().signal();
        }),
    );

    emitter.once(
        "user-action",
        from_fn(&["cb"], |args: Bound| async move {
            println!("[once] first action only");
            args.get::<Done>(0).unwrap().signal();
        }),
    );

    // 3. Emit twice; the once-listener runs a single time
    for round in 1..=2 {
        let (tx, rx) = oneshot::channel();
        emitter.emit("user-action", Args::new(), move || {
            let _ = tx.send(());
        });
        rx.await.unwrap();
        println!("round {round} complete");
    }
}
