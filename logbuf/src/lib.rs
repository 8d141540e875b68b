//! `fibre_logbuf` - coalescing buffers for console output.
//!
//! Many small console writes are expensive when each one becomes its own
//! syscall. `fibre_logbuf` collects output per channel (`log`, `info`, `warn`,
//! `error`) and hands it to the real sinks in larger payloads:
//!
//! - a write that pushes one channel past the configured limit (8 KiB by
//!   default) flushes **every** channel before it returns,
//! - dropping the console (or the global `FlushOnExit` guard) flushes whatever
//!   is left,
//! - each flush calls a channel's sink at most once, with the buffered entries
//!   joined by `'\n'` in arrival order.
//!
//! Output can reach a console directly (`BufferedConsole::info`, the
//! `console_*!` macros), through the `log` facade (`install_log_bridge`), or
//! through `tracing` (`BufferLayer`).
//!
//! ## Quick Start
//!
//! ```
//! use fibre_logbuf::{BufferConfig, BufferedConsole, Channel, ChannelSinks, MemorySink, Prefix};
//!
//! let out = MemorySink::new();
//! let console = BufferedConsole::with_config(
//!   ChannelSinks::uniform(out.clone()),
//!   BufferConfig::new().limit(4096).prefix(Prefix::literal("app: ")),
//! );
//!
//! console.info(format_args!("Hello {}!", "world")).unwrap();
//! console
//!   .write_values(Channel::Warn, &["%d%% done".into(), 50.into()])
//!   .unwrap();
//! assert_eq!(out.writes(), 0);
//!
//! drop(console); // flushes
//! assert_eq!(
//!   out.payloads(),
//!   vec!["app: Hello world!".to_string(), "app: 50% done".to_string()]
//! );
//! ```

// Declare modules following the file structure
pub mod channel;
pub mod config;
pub mod console;
pub mod encoders;
pub mod error;
pub mod global;
mod macros;
pub mod model;
pub mod prefix;
pub mod registry;
pub mod sink;
pub mod subscriber;

// Re-export key public types for easier use by library consumers.
pub use channel::Channel;
pub use config::{BufferConfig, DEFAULT_LIMIT_BYTES};
pub use console::BufferedConsole;
pub use encoders::{MessageFormatter, PrintfFormatter, SpaceJoinFormatter};
pub use error::{Error, Result};
pub use global::{flush_on_exit, FlushOnExit};
pub use model::LogValue;
pub use prefix::Prefix;
pub use sink::{ChannelSinks, MemorySink, Sink, StderrSink, StdoutSink, WriterSink};
pub use subscriber::{install_log_bridge, BufferLayer, LogBridge};
