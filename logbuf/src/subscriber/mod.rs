// src/subscriber/mod.rs
// Bridges that route `log` records and `tracing` events into a console.

pub mod layer;
pub mod log_handler;
mod visitor;

pub use layer::BufferLayer;
pub use log_handler::{install_log_bridge, LogBridge};

// Records from this crate are never intercepted, so its own diagnostics can
// never feed back into the buffer they describe.
pub(crate) fn is_internal_target(target: &str) -> bool {
  target.starts_with(env!("CARGO_CRATE_NAME"))
}
