// src/channel.rs
// The closed set of console channels that can be buffered.

use std::fmt;
use std::str::FromStr;

/// One named console output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
  /// General output, also the target for debug/trace records.
  Log,
  Info,
  Warn,
  Error,
}

impl Channel {
  /// Every channel, in the order the flush engine visits them.
  pub const ALL: [Channel; 4] = [Channel::Log, Channel::Info, Channel::Warn, Channel::Error];

  pub fn as_str(&self) -> &'static str {
    match self {
      Channel::Log => "log",
      Channel::Info => "info",
      Channel::Warn => "warn",
      Channel::Error => "error",
    }
  }

  /// Position of this channel inside per-channel arrays.
  pub(crate) fn index(self) -> usize {
    match self {
      Channel::Log => 0,
      Channel::Info => 1,
      Channel::Warn => 2,
      Channel::Error => 3,
    }
  }
}

impl fmt::Display for Channel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Returned when a string does not name one of the four channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel(pub String);

impl fmt::Display for UnknownChannel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown console channel: {:?}", self.0)
  }
}

impl std::error::Error for UnknownChannel {}

impl FromStr for Channel {
  type Err = UnknownChannel;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "log" | "debug" => Ok(Channel::Log),
      "info" => Ok(Channel::Info),
      "warn" | "warning" => Ok(Channel::Warn),
      "error" => Ok(Channel::Error),
      _ => Err(UnknownChannel(s.to_string())),
    }
  }
}

impl From<log::Level> for Channel {
  fn from(level: log::Level) -> Self {
    match level {
      log::Level::Error => Channel::Error,
      log::Level::Warn => Channel::Warn,
      log::Level::Info => Channel::Info,
      log::Level::Debug | log::Level::Trace => Channel::Log,
    }
  }
}

impl From<tracing::Level> for Channel {
  fn from(level: tracing::Level) -> Self {
    if level == tracing::Level::ERROR {
      Channel::Error
    } else if level == tracing::Level::WARN {
      Channel::Warn
    } else if level == tracing::Level::INFO {
      Channel::Info
    } else {
      Channel::Log
    }
  }
}
