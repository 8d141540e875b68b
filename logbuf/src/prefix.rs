// src/prefix.rs
// Optional text prepended to every buffered entry.

use crate::encoders::util;
use crate::error::{Error, Result};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;

type PrefixFn = dyn Fn() -> String + Send + Sync + 'static;

/// The prefix hook applied to each entry before it is buffered.
#[derive(Clone, Default)]
pub enum Prefix {
  /// Entries are buffered unchanged.
  #[default]
  None,
  /// A literal string prepended verbatim.
  Static(String),
  /// Evaluated once per call, at call time (not at flush time).
  Dynamic(Arc<PrefixFn>),
}

impl Prefix {
  pub fn literal(value: impl Into<String>) -> Self {
    Prefix::Static(value.into())
  }

  pub fn dynamic<F>(f: F) -> Self
  where
    F: Fn() -> String + Send + Sync + 'static,
  {
    Prefix::Dynamic(Arc::new(f))
  }

  /// `[<RFC 3339 millis>] `, evaluated per call.
  pub fn timestamp() -> Self {
    Prefix::dynamic(|| {
      let mut buf = String::with_capacity(28);
      buf.push('[');
      util::write_timestamp(&mut buf, &Utc::now());
      buf.push_str("] ");
      buf
    })
  }

  /// `[<formatted>] ` using a chrono format string, evaluated per call.
  ///
  /// The format is checked here, so a bad specifier fails with
  /// `Error::TimestampFormat` instead of rendering an empty timestamp later.
  pub fn timestamp_with_format(format: impl Into<String>) -> Result<Self> {
    let format = format.into();
    if !util::is_valid_timestamp_format(&format) {
      return Err(Error::TimestampFormat(format));
    }
    Ok(Prefix::dynamic(move || {
      let mut buf = String::with_capacity(32);
      buf.push('[');
      if util::write_timestamp_with_format(&mut buf, &Utc::now(), &format).is_err() {
        buf.truncate(1);
        util::write_timestamp(&mut buf, &Utc::now());
      }
      buf.push_str("] ");
      buf
    }))
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Prefix::None)
  }

  /// Returns `message` with the prefix in front of it.
  pub fn apply(&self, message: String) -> String {
    match self {
      Prefix::None => message,
      Prefix::Static(prefix) => {
        let mut entry = String::with_capacity(prefix.len() + message.len());
        entry.push_str(prefix);
        entry.push_str(&message);
        entry
      }
      Prefix::Dynamic(hook) => {
        let mut entry = hook();
        entry.push_str(&message);
        entry
      }
    }
  }
}

impl fmt::Debug for Prefix {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Prefix::None => f.write_str("Prefix::None"),
      Prefix::Static(s) => f.debug_tuple("Prefix::Static").field(s).finish(),
      Prefix::Dynamic(_) => f.write_str("Prefix::Dynamic(..)"),
    }
  }
}

impl From<&str> for Prefix {
  fn from(value: &str) -> Self {
    Prefix::Static(value.to_string())
  }
}

impl From<String> for Prefix {
  fn from(value: String) -> Self {
    Prefix::Static(value)
  }
}
