// src/subscriber/layer.rs
// A `tracing` layer that writes events into a buffered console.

use crate::{channel::Channel, console::BufferedConsole, subscriber::visitor::LineVisitor};
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Routes every `tracing` event into a `BufferedConsole`.
///
/// The channel is chosen from the event level (`ERROR`→error, `WARN`→warn,
/// `INFO`→info, `DEBUG`/`TRACE`→log). The entry is the event's message
/// followed by its other fields as sorted `key=value` pairs.
///
/// # Examples
///
/// ```
/// use fibre_logbuf::{BufferLayer, BufferedConsole, Channel, ChannelSinks, MemorySink};
/// use std::sync::Arc;
/// use tracing_subscriber::prelude::*;
///
/// let console = Arc::new(BufferedConsole::new(ChannelSinks::uniform(MemorySink::new())));
/// let subscriber = tracing_subscriber::registry().with(BufferLayer::new(console.clone()));
///
/// tracing::subscriber::with_default(subscriber, || {
///   tracing::warn!(target: "app", disk = "sda", "almost full");
/// });
/// assert_eq!(console.buffered(Channel::Warn), vec!["almost full disk=sda".to_string()]);
/// ```
pub struct BufferLayer {
  console: Arc<BufferedConsole>,
}

impl BufferLayer {
  pub fn new(console: Arc<BufferedConsole>) -> Self {
    Self { console }
  }
}

impl<S> Layer<S> for BufferLayer
where
  S: Subscriber,
{
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let metadata = event.metadata();
    if super::is_internal_target(metadata.target()) {
      return;
    }

    let mut visitor = LineVisitor::new();
    event.record(&mut visitor);

    let channel = Channel::from(*metadata.level());
    if let Err(e) = self.console.write_str(channel, &visitor.into_line()) {
      // A layer has no caller to hand the error back to.
      eprintln!("[fibre_logbuf:ERROR] tracing layer: {}", e);
    }
  }
}
