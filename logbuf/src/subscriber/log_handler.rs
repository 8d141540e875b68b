// src/subscriber/log_handler.rs

use crate::{
  channel::Channel,
  console::BufferedConsole,
  error::{Error, Result},
};
use log::{LevelFilter, Metadata, Record};
use std::sync::Arc;

/// A `log::Log` implementation that buffers records in a `BufferedConsole`.
///
/// Records are written as `LEVEL target - message` to the channel mapped from
/// their level (`Error`→error, `Warn`→warn, `Info`→info, `Debug`/`Trace`→log).
/// `log::logger().flush()` flushes the console.
pub struct LogBridge {
  console: Arc<BufferedConsole>,
  level: LevelFilter,
}

impl LogBridge {
  pub fn new(console: Arc<BufferedConsole>, level: LevelFilter) -> Self {
    Self { console, level }
  }
}

impl log::Log for LogBridge {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= self.level && !super::is_internal_target(metadata.target())
  }

  fn log(&self, record: &Record<'_>) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let channel = Channel::from(record.level());
    let result = self.console.write_args(
      channel,
      format_args!("{} {} - {}", record.level(), record.target(), record.args()),
    );
    if let Err(e) = result {
      eprintln!("[fibre_logbuf:ERROR] log bridge: {}", e);
    }
  }

  fn flush(&self) {
    if let Err(e) = self.console.flush() {
      eprintln!("[fibre_logbuf:ERROR] log bridge flush: {}", e);
    }
  }
}

/// Registers a `LogBridge` as the process-wide `log` logger and sets the
/// `log` max level to `level`.
///
/// Fails with `Error::LoggerInstall` if a logger is already installed.
pub fn install_log_bridge(console: Arc<BufferedConsole>, level: LevelFilter) -> Result<()> {
  log::set_boxed_logger(Box::new(LogBridge::new(console, level)))
    .map_err(|e| Error::LoggerInstall(e.to_string()))?;
  log::set_max_level(level);
  tracing::debug!(target: "fibre_logbuf::subscriber", %level, "log bridge installed");
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sink::{ChannelSinks, MemorySink};
  use log::Log;
  use pretty_assertions::assert_eq;

  fn bridge(level: LevelFilter) -> (LogBridge, Arc<BufferedConsole>, MemorySink) {
    let sink = MemorySink::new();
    let console = Arc::new(BufferedConsole::new(ChannelSinks::uniform(sink.clone())));
    (LogBridge::new(console.clone(), level), console, sink)
  }

  fn record(bridge: &LogBridge, level: log::Level, target: &str, message: &str) {
    bridge.log(
      &Record::builder()
        .level(level)
        .target(target)
        .args(format_args!("{}", message))
        .build(),
    );
  }

  #[test]
  fn records_route_by_level() {
    let (bridge, console, _sink) = bridge(LevelFilter::Trace);
    record(&bridge, log::Level::Error, "app::db", "down");
    record(&bridge, log::Level::Warn, "app", "slow");
    record(&bridge, log::Level::Info, "app", "ready");
    record(&bridge, log::Level::Debug, "app", "d");
    record(&bridge, log::Level::Trace, "app", "t");

    assert_eq!(console.buffered(Channel::Error), vec!["ERROR app::db - down".to_string()]);
    assert_eq!(console.buffered(Channel::Warn), vec!["WARN app - slow".to_string()]);
    assert_eq!(console.buffered(Channel::Info), vec!["INFO app - ready".to_string()]);
    assert_eq!(
      console.buffered(Channel::Log),
      vec!["DEBUG app - d".to_string(), "TRACE app - t".to_string()]
    );
  }

  #[test]
  fn records_above_level_are_ignored() {
    let (bridge, console, _sink) = bridge(LevelFilter::Warn);
    record(&bridge, log::Level::Info, "app", "chatty");
    assert!(console.buffered(Channel::Info).is_empty());
  }

  #[test]
  fn internal_targets_are_ignored() {
    let (bridge, console, _sink) = bridge(LevelFilter::Trace);
    record(&bridge, log::Level::Info, "fibre_logbuf::console", "loop");
    assert!(console.buffered(Channel::Info).is_empty());
  }

  #[test]
  fn flush_drains_console() {
    let (bridge, _console, sink) = bridge(LevelFilter::Info);
    record(&bridge, log::Level::Info, "app", "one");
    record(&bridge, log::Level::Info, "app", "two");
    bridge.flush();
    assert_eq!(sink.payloads(), vec!["INFO app - one\nINFO app - two".to_string()]);
  }
}
