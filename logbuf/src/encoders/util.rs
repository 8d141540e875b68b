// src/encoders/util.rs
// Utility functions shared by formatters and prefix hooks.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::{self, Write};

/// Formats a timestamp into a string buffer.
/// Format: RFC 3339 with millisecond precision and a `Z` suffix.
pub fn write_timestamp(buf: &mut String, timestamp: &DateTime<Utc>) {
  let _ = write!(
    buf,
    "{}",
    timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
  );
}

/// Formats a timestamp with a caller-supplied chrono format string.
///
/// Fails if `format` contains a specifier chrono does not understand; check it
/// up front with `is_valid_timestamp_format`.
pub fn write_timestamp_with_format(
  buf: &mut String,
  timestamp: &DateTime<Utc>,
  format: &str,
) -> fmt::Result {
  write!(buf, "{}", timestamp.format(format))
}

/// Returns `false` if chrono would reject `format` when rendering.
pub fn is_valid_timestamp_format(format: &str) -> bool {
  !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
