//! Event system: default signals, callbacks, and connections.

pub mod binding;
pub mod callback;
pub mod signal;

pub use binding::{plan_bindings, Binding, Connection, Connections};
pub use callback::Callback;
pub use signal::{default_signal, Signal};
