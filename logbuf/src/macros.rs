//! Public macros that write to the global console.
//!
//! Each macro takes `format!`-style arguments and evaluates to
//! `fibre_logbuf::Result<()>`; an `Err` means formatting failed or a
//! threshold-triggered flush hit a failing sink.

/// Buffers a line on the global console's `log` channel.
///
/// # Examples
///
/// ```
/// use fibre_logbuf::console_log;
///
/// console_log!("Hello {}!", "world").unwrap();
/// fibre_logbuf::global::flush().unwrap();
/// ```
#[macro_export]
macro_rules! console_log {
  ($($arg:tt)*) => {
    $crate::global::global().log(format_args!($($arg)*))
  };
}

/// Buffers a line on the global console's `info` channel.
#[macro_export]
macro_rules! console_info {
  ($($arg:tt)*) => {
    $crate::global::global().info(format_args!($($arg)*))
  };
}

/// Buffers a line on the global console's `warn` channel.
#[macro_export]
macro_rules! console_warn {
  ($($arg:tt)*) => {
    $crate::global::global().warn(format_args!($($arg)*))
  };
}

/// Buffers a line on the global console's `error` channel.
#[macro_export]
macro_rules! console_error {
  ($($arg:tt)*) => {
    $crate::global::global().error(format_args!($($arg)*))
  };
}
