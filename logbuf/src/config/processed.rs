// src/config/processed.rs
use crate::config::raw::{BufferConfigRaw, PrefixConfigRaw};
use crate::prefix::Prefix;
use serde_yaml::Value;

/// Flush threshold used when none (or a non-positive one) is configured.
pub const DEFAULT_LIMIT_BYTES: usize = 8192;

/// Validated configuration for a `BufferedConsole`.
#[derive(Debug, Clone)]
pub struct BufferConfig {
  /// A flush of every channel happens as soon as one channel's pending size
  /// exceeds this many bytes.
  pub limit_bytes: usize,
  pub prefix: Prefix,
}

impl Default for BufferConfig {
  fn default() -> Self {
    Self {
      limit_bytes: DEFAULT_LIMIT_BYTES,
      prefix: Prefix::None,
    }
  }
}

impl BufferConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the flush threshold in bytes. `0` selects `DEFAULT_LIMIT_BYTES`.
  pub fn limit(mut self, limit_bytes: usize) -> Self {
    self.limit_bytes = if limit_bytes == 0 {
      DEFAULT_LIMIT_BYTES
    } else {
      limit_bytes
    };
    self
  }

  /// Sets the prefix hook applied to every entry.
  pub fn prefix(mut self, prefix: impl Into<Prefix>) -> Self {
    self.prefix = prefix.into();
    self
  }
}

// --- Conversion and Validation Logic ---

/// Processes the raw, deserialized configuration. Never fails: bad values fall
/// back to defaults.
pub fn process_raw_config(raw: BufferConfigRaw) -> BufferConfig {
  let limit_bytes = raw
    .limit
    .as_ref()
    .and_then(positive_limit)
    .unwrap_or(DEFAULT_LIMIT_BYTES);

  let prefix = match raw.prefix {
    None | Some(PrefixConfigRaw::None) => Prefix::None,
    Some(PrefixConfigRaw::Static(s)) => Prefix::Static(s.value),
    Some(PrefixConfigRaw::Timestamp(t)) => match t.format {
      Some(format) if !format.is_empty() => {
        Prefix::timestamp_with_format(format).unwrap_or_else(|e| {
          tracing::warn!(
            target: "fibre_logbuf::config",
            error = %e,
            "falling back to the default timestamp prefix"
          );
          Prefix::timestamp()
        })
      }
      _ => Prefix::timestamp(),
    },
  };

  BufferConfig {
    limit_bytes,
    prefix,
  }
}

fn positive_limit(value: &Value) -> Option<usize> {
  let n = match value {
    Value::Number(n) => n.as_u64().map(|v| v as f64).or_else(|| n.as_f64())?,
    Value::String(s) => s.trim().parse::<f64>().ok()?,
    _ => return None,
  };

  if n.is_finite() && n >= 1.0 {
    Some(n.floor() as usize)
  } else {
    None
  }
}
