use crate::channel::Channel;
use thiserror::Error;

/// The main error type for the `fibre_logbuf` library.
#[derive(Debug, Error)]
pub enum Error {
  /// A value's `Display`/`Debug` implementation reported an error while the
  /// message was being built. Nothing is buffered in this case.
  #[error("Failed to format log message")]
  Format(#[from] std::fmt::Error),

  /// The original sink of a channel failed while a payload was being flushed.
  /// The channel's buffer has already been reset when this is returned.
  #[error("Sink for channel '{channel}' failed during flush: {source}")]
  Sink {
    channel: Channel,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),

  /// A chrono format string for a timestamp prefix contains an unknown or
  /// incomplete specifier.
  #[error("Invalid timestamp format: {0:?}")]
  TimestampFormat(String),

  #[error("Failed to install log bridge: {0}")]
  LoggerInstall(String),
}

/// A specialized `Result` type for `fibre_logbuf` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
