// examples/string_prefix.rs
//
// Every channel gets a static prefix. The direct stdout writes show up first;
// the buffered console lines appear together when the console is dropped.

use fibre_logbuf::{BufferConfig, BufferedConsole, Channel, ChannelSinks, LogValue};
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let console = BufferedConsole::with_config(
    ChannelSinks::console(),
    BufferConfig::new().prefix("some string: "),
  );

  for channel in Channel::ALL {
    {
      let mut out = io::stdout().lock();
      write!(out, "Testing {}", channel)?;
      writeln!(out, " data should appear at the end of the output")?;
    }
    console.write_values(channel, &[LogValue::from("Hello %s!"), LogValue::from("world")])?;
  }

  Ok(())
}
