// Defines strategies for turning call arguments into a single console entry.

use crate::error::Result;
use crate::model::LogValue;

pub mod printf;
pub mod util;

pub use printf::PrintfFormatter;

/// Trait for types that can render a dynamic argument list into one string.
///
/// The returned string is buffered as a single entry; it should not carry a
/// trailing newline, the flush engine inserts separators between entries.
pub trait MessageFormatter: Send + Sync + 'static {
  fn format_message(&self, args: &[LogValue]) -> Result<String>;
}

/// Joins every argument's `Display` output with a single space.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpaceJoinFormatter;

impl MessageFormatter for SpaceJoinFormatter {
  fn format_message(&self, args: &[LogValue]) -> Result<String> {
    use std::fmt::Write;

    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
      if i > 0 {
        out.push(' ');
      }
      write!(out, "{}", arg)?;
    }
    Ok(out)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn space_join_ignores_directives() {
    let out = SpaceJoinFormatter
      .format_message(&["%s".into(), 1.into(), false.into()])
      .unwrap();
    assert_eq!(out, "%s 1 false");
  }

  #[test]
  fn space_join_of_nothing_is_empty() {
    assert_eq!(SpaceJoinFormatter.format_message(&[]).unwrap(), "");
  }
}
