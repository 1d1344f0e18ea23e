//! Named-argument binding: values from the bundle arrive in each listener's
//! declared parameter order, and the completion signal is available under
//! either reserved name (`cb` or `callback`).
use evoke::{Args, Bound, Done, Emitter, from_fn};
use tokio::sync::oneshot;

#[tokio::main]
async fn main() {
    let emitter = Emitter::new();

    // Declares (greeting, user, cb); `attempts` in the bundle is ignored.
    emitter.on(
        "login",
        from_fn(&["greeting", "user", "cb"], |args: Bound| async move {
            let greeting = args.get::<String>(0).unwrap();
            let user = args.get::<String>(1).unwrap();
            println!("{greeting}, {user}!");
            args.get::<Done>(2).unwrap().signal();
        }),
    );

    // Declares (user, attempts, callback); same bundle, different order.
    emitter.on(
        "login",
        from_fn(&["user", "attempts", "callback"], |args: Bound| async move {
            let user = args.get::<String>(0).unwrap();
            let attempts = args.get::<u32>(1).unwrap();
            println!("{user} logged in after {attempts} attempt(s)");
            args.get::<Done>(2).unwrap().signal();
        }),
    );

    let (tx, rx) = oneshot::channel();
    emitter.emit(
        "login",
        Args::new()
            .with("greeting", "Welcome back".to_string())
            .with("user", "night".to_string())
            .with("attempts", 2u32),
        move || {
            let _ = tx.send(());
        },
    );
    rx.await.unwrap();
    println!("all listeners done");
}
