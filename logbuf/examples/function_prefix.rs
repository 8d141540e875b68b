// examples/function_prefix.rs
//
// Same as `string_prefix`, but the prefix is a timestamp evaluated at call
// time, and output goes through the global console and its macros.

use fibre_logbuf::{global, BufferConfig, Prefix};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Keep the guard alive for the whole of main; dropping it flushes.
  let _flush = global::flush_on_exit();
  global::configure(BufferConfig::new().prefix(Prefix::timestamp()));

  for name in ["log", "info", "warn", "error"] {
    {
      let mut out = io::stdout().lock();
      write!(out, "Testing {}", name)?;
      writeln!(out, " data should appear at the end of the output")?;
    }
    match name {
      "log" => fibre_logbuf::console_log!("Hello {}!", "world")?,
      "info" => fibre_logbuf::console_info!("Hello {}!", "world")?,
      "warn" => fibre_logbuf::console_warn!("Hello {}!", "world")?,
      _ => fibre_logbuf::console_error!("Hello {}!", "world")?,
    }
  }

  Ok(())
}
