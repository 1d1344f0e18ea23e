mod args;
mod barrier;
mod binder;
mod config;
mod emitter;
mod error;
mod listener;

pub use {
    args::{Args, Value},
    barrier::Done,
    binder::{Bound, ParamName, bind},
    config::Config,
    emitter::{Emitter, ListenerId},
    error::{Error, Result},
    listener::*,
};
