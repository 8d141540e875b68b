//! The process-wide console instance and access functions.
//!
//! Most programs should own a `BufferedConsole` directly. The global instance
//! exists for code that cannot thread a handle through, and for the
//! `console_*!` macros.

use crate::{
  config::BufferConfig, console::BufferedConsole, error::Result, sink::ChannelSinks,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;

// The one and only global console. Created on first access or by `init`.
static GLOBAL_CONSOLE: OnceCell<Arc<BufferedConsole>> = OnceCell::new();

/// Creates the global console around `sinks`.
///
/// Returns `false` without touching anything if the global console already
/// exists, so repeated initialisation is harmless. Use `configure` to change
/// the limit or prefix afterwards.
pub fn init(sinks: ChannelSinks, config: BufferConfig) -> bool {
  let mut created = false;
  GLOBAL_CONSOLE.get_or_init(|| {
    created = true;
    Arc::new(BufferedConsole::with_config(sinks, config))
  });
  if created {
    tracing::debug!(target: "fibre_logbuf::global", "global console initialized");
  }
  created
}

/// Provides a reference to the global console, creating it with
/// `ChannelSinks::console()` and the default configuration if `init` was
/// never called.
pub fn global() -> &'static Arc<BufferedConsole> {
  GLOBAL_CONSOLE.get_or_init(|| Arc::new(BufferedConsole::new(ChannelSinks::console())))
}

/// Reconfigures the global console.
pub fn configure(config: BufferConfig) {
  global().configure(config);
}

/// Flushes the global console.
pub fn flush() -> Result<()> {
  match GLOBAL_CONSOLE.get() {
    Some(console) => console.flush(),
    None => Ok(()),
  }
}

/// Returns a guard that flushes the global console when dropped.
///
/// Statics are never dropped, so a program using the global console should
/// hold this guard in `main` for the whole run.
///
/// # Examples
///
/// ```
/// fn main() {
///   let _flush = fibre_logbuf::global::flush_on_exit();
///   fibre_logbuf::console_info!("starting up").unwrap();
///   // ... the buffered line is written when `_flush` goes out of scope.
/// }
/// ```
pub fn flush_on_exit() -> FlushOnExit {
  let _ = global();
  FlushOnExit { _private: () }
}

/// Flushes the global console on drop. See `flush_on_exit`.
#[must_use = "The guard must be kept alive for buffered output to be flushed on exit"]
#[derive(Debug)]
pub struct FlushOnExit {
  _private: (),
}

impl Drop for FlushOnExit {
  fn drop(&mut self) {
    if let Err(e) = flush() {
      eprintln!("[fibre_logbuf:ERROR] Flush on exit failed: {}", e);
    }
  }
}
