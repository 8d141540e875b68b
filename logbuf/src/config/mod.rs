// src/config/mod.rs
// Configuration: builder API plus a YAML file format.

pub mod processed; // Validated configuration used by the console
pub mod raw; // Structs directly mapping to the YAML structure

pub use processed::{BufferConfig, DEFAULT_LIMIT_BYTES};

use crate::error::{Error, Result};
use raw::BufferConfigRaw;
use std::{fs::File, io, path::Path};

impl BufferConfig {
  /// Parses a YAML document into a configuration.
  pub fn from_yaml_str(source: &str) -> Result<Self> {
    let raw: BufferConfigRaw =
      serde_yaml::from_str(source).map_err(|e| Error::ConfigParse(e.to_string()))?;
    Ok(processed::process_raw_config(raw))
  }

  /// Reads and parses a YAML configuration file.
  pub fn from_file(path: &Path) -> Result<Self> {
    let file = File::open(path)?;
    let reader = io::BufReader::new(file);
    let raw: BufferConfigRaw =
      serde_yaml::from_reader(reader).map_err(|e| Error::ConfigParse(e.to_string()))?;
    let config = processed::process_raw_config(raw);
    tracing::debug!(
      target: "fibre_logbuf::config",
      path = %path.display(),
      limit_bytes = config.limit_bytes,
      "loaded buffer configuration"
    );
    Ok(config)
  }
}
