// src/sink.rs
// The real output functions that buffered payloads are eventually written to.

use crate::channel::Channel;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// A real output destination for one channel.
///
/// A sink receives one payload per flush: every entry buffered for its channel
/// since the previous flush, joined with `'\n'`. Console-like sinks append their
/// own line terminator, the payload never ends with one.
pub trait Sink: Send + Sync + 'static {
  fn write_payload(&self, payload: &str) -> io::Result<()>;
}

impl<F> Sink for F
where
  F: Fn(&str) -> io::Result<()> + Send + Sync + 'static,
{
  fn write_payload(&self, payload: &str) -> io::Result<()> {
    self(payload)
  }
}

/// Writes each payload to standard output followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
  fn write_payload(&self, payload: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(payload.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
  }
}

/// Writes each payload to standard error followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
  fn write_payload(&self, payload: &str) -> io::Result<()> {
    let mut out = io::stderr().lock();
    out.write_all(payload.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
  }
}

/// Adapts any `io::Write` into a sink. Each payload is written as one line.
pub struct WriterSink<W> {
  writer: Mutex<W>,
}

impl<W: Write + Send + 'static> WriterSink<W> {
  pub fn new(writer: W) -> Self {
    Self {
      writer: Mutex::new(writer),
    }
  }

  pub fn into_inner(self) -> W {
    self.writer.into_inner()
  }
}

impl<W: Write + Send + 'static> Sink for WriterSink<W> {
  fn write_payload(&self, payload: &str) -> io::Result<()> {
    let mut writer = self.writer.lock();
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
  }
}

impl<W> fmt::Debug for WriterSink<W> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WriterSink").finish_non_exhaustive()
  }
}

/// Records every payload it receives. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
  payloads: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
  pub fn new() -> Self {
    Self::default()
  }

  /// A copy of every payload received so far, oldest first.
  pub fn payloads(&self) -> Vec<String> {
    self.payloads.lock().clone()
  }

  /// Removes and returns every payload received so far.
  pub fn take(&self) -> Vec<String> {
    std::mem::take(&mut *self.payloads.lock())
  }

  /// Number of times the sink was invoked.
  pub fn writes(&self) -> usize {
    self.payloads.lock().len()
  }
}

impl Sink for MemorySink {
  fn write_payload(&self, payload: &str) -> io::Result<()> {
    self.payloads.lock().push(payload.to_string());
    Ok(())
  }
}

/// The original sink of every channel.
///
/// Captured once when a console is built and never replaced afterwards; this
/// is the only path by which buffered text reaches its destination.
#[derive(Clone)]
pub struct ChannelSinks {
  sinks: [Arc<dyn Sink>; 4],
}

impl ChannelSinks {
  /// `log`/`info` to stdout, `warn`/`error` to stderr.
  pub fn console() -> Self {
    let stdout: Arc<dyn Sink> = Arc::new(StdoutSink);
    let stderr: Arc<dyn Sink> = Arc::new(StderrSink);
    Self {
      sinks: [stdout.clone(), stdout, stderr.clone(), stderr],
    }
  }

  /// Every channel shares one sink.
  pub fn uniform(sink: impl Sink) -> Self {
    let shared: Arc<dyn Sink> = Arc::new(sink);
    Self {
      sinks: [shared.clone(), shared.clone(), shared.clone(), shared],
    }
  }

  /// Replaces the sink of one channel.
  pub fn with(mut self, channel: Channel, sink: impl Sink) -> Self {
    self.sinks[channel.index()] = Arc::new(sink);
    self
  }

  pub fn get(&self, channel: Channel) -> &Arc<dyn Sink> {
    &self.sinks[channel.index()]
  }
}

impl Default for ChannelSinks {
  fn default() -> Self {
    Self::console()
  }
}

impl fmt::Debug for ChannelSinks {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ChannelSinks").finish_non_exhaustive()
  }
}
