use serde::Deserialize;

// --- Top Level Config ---
#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct BufferConfigRaw {
  /// Flush threshold in bytes. Kept untyped so that a non-numeric or
  /// non-positive value can fall back to the default instead of failing.
  #[serde(default)]
  pub limit: Option<serde_yaml::Value>,
  #[serde(default)]
  pub prefix: Option<PrefixConfigRaw>,
}

// --- Prefix Config ---
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)] // "kind" determines the enum variant
pub enum PrefixConfigRaw {
  None,
  Static(StaticPrefixConfigRaw),
  Timestamp(TimestampPrefixConfigRaw),
}

#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct StaticPrefixConfigRaw {
  pub value: String,
}

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct TimestampPrefixConfigRaw {
  /// chrono format string; RFC 3339 with milliseconds when absent.
  #[serde(default)]
  pub format: Option<String>,
}
