// src/console.rs
// The buffering decorator composed over the original channel sinks.

use crate::{
  channel::Channel,
  config::BufferConfig,
  encoders::{MessageFormatter, PrintfFormatter},
  error::{Error, Result},
  model::LogValue,
  registry::ChannelRegistry,
  sink::ChannelSinks,
};
use parking_lot::Mutex;
use std::fmt::{self, Write};
use std::sync::Arc;

struct ConsoleState {
  config: Arc<BufferConfig>,
  registry: ChannelRegistry,
}

/// Buffers console output per channel and writes it to the original sinks in
/// coalesced payloads.
///
/// Every write formats its arguments, applies the configured prefix, and
/// appends the entry to its channel. When a channel's pending size exceeds the
/// configured limit, all channels are flushed before the write returns.
/// Dropping the console flushes whatever is still buffered.
///
/// The sinks passed at construction are the only place bytes are written to;
/// `configure` changes the limit and prefix but always keeps wrapping those
/// same sinks.
///
/// # Examples
///
/// ```
/// use fibre_logbuf::{BufferConfig, BufferedConsole, Channel, ChannelSinks, MemorySink};
///
/// let out = MemorySink::new();
/// let console = BufferedConsole::with_config(
///   ChannelSinks::uniform(out.clone()),
///   BufferConfig::new().limit(20),
/// );
///
/// console.log(format_args!("{}", "aaaaaaaaaa")).unwrap();
/// console.log(format_args!("{}", "bbbbbbbbbb")).unwrap();
/// assert_eq!(out.writes(), 0);
///
/// console.log(format_args!("c")).unwrap();
/// assert_eq!(out.payloads(), vec!["aaaaaaaaaa\nbbbbbbbbbb\nc".to_string()]);
/// assert_eq!(console.pending_size(Channel::Log), 0);
/// ```
pub struct BufferedConsole {
  sinks: ChannelSinks,
  formatter: Box<dyn MessageFormatter>,
  state: Mutex<ConsoleState>,
  // Held across drain and emit so payloads of one channel reach its sink in order.
  flush_lock: Mutex<()>,
}

impl BufferedConsole {
  /// Creates a console with the default configuration (8 KiB, no prefix).
  pub fn new(sinks: ChannelSinks) -> Self {
    Self::with_config(sinks, BufferConfig::default())
  }

  pub fn with_config(sinks: ChannelSinks, config: BufferConfig) -> Self {
    Self {
      sinks,
      formatter: Box::new(PrintfFormatter::new()),
      state: Mutex::new(ConsoleState {
        config: Arc::new(config),
        registry: ChannelRegistry::new(),
      }),
      flush_lock: Mutex::new(()),
    }
  }

  /// Replaces the formatter used by `write_values`.
  pub fn with_formatter(mut self, formatter: impl MessageFormatter) -> Self {
    self.formatter = Box::new(formatter);
    self
  }

  /// Installs a new limit and prefix.
  ///
  /// Buffered entries are kept as they are. A lowered limit takes effect on the
  /// next write.
  pub fn configure(&self, config: BufferConfig) {
    let limit_bytes = config.limit_bytes;
    let has_prefix = !config.prefix.is_none();
    self.state.lock().config = Arc::new(config);
    tracing::debug!(
      target: "fibre_logbuf::console",
      limit_bytes,
      has_prefix,
      "console reconfigured"
    );
  }

  /// The configuration currently in effect.
  pub fn config(&self) -> BufferConfig {
    BufferConfig::clone(&self.state.lock().config)
  }

  /// Formats `args` and buffers the result on `channel`.
  pub fn write_args(&self, channel: Channel, args: fmt::Arguments<'_>) -> Result<()> {
    let mut message = String::new();
    message.write_fmt(args)?;
    self.buffer_entry(channel, message)
  }

  /// Buffers `message` on `channel` as-is (apart from the prefix).
  pub fn write_str(&self, channel: Channel, message: &str) -> Result<()> {
    self.buffer_entry(channel, message.to_string())
  }

  /// Formats a dynamic argument list with the console's formatter (printf-style
  /// by default) and buffers the result on `channel`.
  pub fn write_values(&self, channel: Channel, args: &[LogValue]) -> Result<()> {
    let message = self.formatter.format_message(args)?;
    self.buffer_entry(channel, message)
  }

  pub fn log(&self, args: fmt::Arguments<'_>) -> Result<()> {
    self.write_args(Channel::Log, args)
  }

  pub fn info(&self, args: fmt::Arguments<'_>) -> Result<()> {
    self.write_args(Channel::Info, args)
  }

  pub fn warn(&self, args: fmt::Arguments<'_>) -> Result<()> {
    self.write_args(Channel::Warn, args)
  }

  pub fn error(&self, args: fmt::Arguments<'_>) -> Result<()> {
    self.write_args(Channel::Error, args)
  }

  /// Bytes currently buffered on `channel`.
  pub fn pending_size(&self, channel: Channel) -> usize {
    self.state.lock().registry.pending_size(channel)
  }

  /// A copy of the entries currently buffered on `channel`, oldest first.
  pub fn buffered(&self, channel: Channel) -> Vec<String> {
    self.state.lock().registry.buffered(channel).to_vec()
  }

  /// Writes every non-empty channel to its original sink, once per channel,
  /// and resets all channels.
  ///
  /// All channels are reset before the first sink is called. If a sink fails,
  /// the error is returned immediately and payloads of channels that had not
  /// been written yet are dropped.
  ///
  /// Must not be called from inside a sink of the same console.
  pub fn flush(&self) -> Result<()> {
    {
      let _emitting = self.flush_lock.lock();
      self.drain_and_emit()?;
    }
    // Writers that crossed the limit while we held the lock deferred to us.
    if self.over_limit() {
      self.flush_for_threshold()
    } else {
      Ok(())
    }
  }

  fn buffer_entry(&self, channel: Channel, message: String) -> Result<()> {
    // The prefix hook runs outside the lock so that it may itself log.
    let config = self.state.lock().config.clone();
    let entry = config.prefix.apply(message);

    let (pending, limit) = {
      let mut state = self.state.lock();
      let pending = state.registry.append(channel, entry);
      (pending, state.config.limit_bytes)
    };

    if pending > limit {
      tracing::trace!(
        target: "fibre_logbuf::console",
        %channel,
        pending,
        limit,
        "limit exceeded, flushing all channels"
      );
      self.flush_for_threshold()
    } else {
      Ok(())
    }
  }

  // If a flush is already in progress (another thread, or a sink writing back
  // into this console) the caller defers to it instead of blocking. The lock
  // holder re-checks the limit after releasing, so a deferred entry is flushed
  // before that holder returns.
  fn flush_for_threshold(&self) -> Result<()> {
    loop {
      {
        let Some(_emitting) = self.flush_lock.try_lock() else {
          tracing::trace!(
            target: "fibre_logbuf::console",
            "flush already in progress, deferring"
          );
          return Ok(());
        };
        self.drain_and_emit()?;
      }
      if !self.over_limit() {
        return Ok(());
      }
    }
  }

  fn over_limit(&self) -> bool {
    let state = self.state.lock();
    state.registry.exceeds(state.config.limit_bytes)
  }

  fn drain_and_emit(&self) -> Result<()> {
    let payloads = self.state.lock().registry.drain();
    if payloads.is_empty() {
      return Ok(());
    }

    let mut bytes = 0;
    for (channel, payload) in &payloads {
      self
        .sinks
        .get(*channel)
        .write_payload(payload)
        .map_err(|source| Error::Sink {
          channel: *channel,
          source,
        })?;
      bytes += payload.len();
    }

    tracing::trace!(
      target: "fibre_logbuf::console",
      channels = payloads.len(),
      bytes,
      "flushed buffered output"
    );
    Ok(())
  }
}

impl Drop for BufferedConsole {
  fn drop(&mut self) {
    if let Err(e) = self.flush() {
      eprintln!("[fibre_logbuf:ERROR] Final flush failed: {}", e);
    }
  }
}

impl fmt::Debug for BufferedConsole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.lock();
    f.debug_struct("BufferedConsole")
      .field("limit_bytes", &state.config.limit_bytes)
      .field("prefix", &state.config.prefix)
      .field("registry", &state.registry)
      .finish_non_exhaustive()
  }
}
