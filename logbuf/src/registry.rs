// src/registry.rs
// Per-channel accumulation buffers.

use crate::channel::Channel;

/// Separator inserted between entries when a channel's buffer is joined.
pub(crate) const ENTRY_SEPARATOR: &str = "\n";

/// Pending entries for one channel.
#[derive(Debug, Default)]
struct ChannelBuffer {
  entries: Vec<String>,
  /// Sum of the UTF-8 byte lengths of `entries`. Separators are not counted.
  pending_size: usize,
}

impl ChannelBuffer {
  fn take_payload(&mut self) -> Option<String> {
    let payload = if self.pending_size > 0 {
      Some(self.entries.join(ENTRY_SEPARATOR))
    } else {
      None
    };
    // Both halves reset together whether or not anything was emitted.
    self.entries.clear();
    self.pending_size = 0;
    payload
  }
}

/// Exactly one buffer per channel, for the lifetime of the registry.
#[derive(Debug, Default)]
pub struct ChannelRegistry {
  buffers: [ChannelBuffer; 4],
}

impl ChannelRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends an entry and returns the channel's new pending size.
  pub fn append(&mut self, channel: Channel, entry: String) -> usize {
    let buffer = &mut self.buffers[channel.index()];
    buffer.pending_size += entry.len();
    buffer.entries.push(entry);
    buffer.pending_size
  }

  pub fn pending_size(&self, channel: Channel) -> usize {
    self.buffers[channel.index()].pending_size
  }

  /// The entries currently waiting on `channel`, oldest first.
  pub fn buffered(&self, channel: Channel) -> &[String] {
    &self.buffers[channel.index()].entries
  }

  /// True if any channel's pending size is above `limit`.
  pub fn exceeds(&self, limit: usize) -> bool {
    self.buffers.iter().any(|b| b.pending_size > limit)
  }

  pub fn is_empty(&self) -> bool {
    self.buffers.iter().all(|b| b.entries.is_empty())
  }

  /// Empties every channel and returns one joined payload per channel whose
  /// pending size was non-zero, in `Channel::ALL` order.
  pub fn drain(&mut self) -> Vec<(Channel, String)> {
    Channel::ALL
      .iter()
      .filter_map(|&channel| {
        self.buffers[channel.index()]
          .take_payload()
          .map(|payload| (channel, payload))
      })
      .collect()
  }
}
