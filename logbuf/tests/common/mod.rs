#![allow(dead_code)]

use fibre_logbuf::{BufferConfig, BufferedConsole, Channel, ChannelSinks, MemorySink};

/// One recording sink per channel, so tests can tell channels apart.
pub struct Sinks {
  pub log: MemorySink,
  pub info: MemorySink,
  pub warn: MemorySink,
  pub error: MemorySink,
}

impl Sinks {
  pub fn new() -> Self {
    Self {
      log: MemorySink::new(),
      info: MemorySink::new(),
      warn: MemorySink::new(),
      error: MemorySink::new(),
    }
  }

  pub fn get(&self, channel: Channel) -> &MemorySink {
    match channel {
      Channel::Log => &self.log,
      Channel::Info => &self.info,
      Channel::Warn => &self.warn,
      Channel::Error => &self.error,
    }
  }

  pub fn channel_sinks(&self) -> ChannelSinks {
    ChannelSinks::uniform(self.log.clone())
      .with(Channel::Info, self.info.clone())
      .with(Channel::Warn, self.warn.clone())
      .with(Channel::Error, self.error.clone())
  }

  /// Total sink invocations across every channel.
  pub fn total_writes(&self) -> usize {
    Channel::ALL.iter().map(|c| self.get(*c).writes()).sum()
  }
}

// Helper to build a console over separate per-channel recording sinks.
pub fn build_test_console(config: BufferConfig) -> (BufferedConsole, Sinks) {
  let sinks = Sinks::new();
  let console = BufferedConsole::with_config(sinks.channel_sinks(), config);
  (console, sinks)
}
