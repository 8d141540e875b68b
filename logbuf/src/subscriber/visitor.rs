// src/subscriber/visitor.rs
use crate::model::LogValue;
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::field::{Field, Visit};

/// Collects a `tracing` event's message and fields into one console line.
#[derive(Default)]
pub(crate) struct LineVisitor {
  message: Option<String>,
  // BTreeMap for a stable key order in the rendered line.
  fields: BTreeMap<String, LogValue>,
}

impl LineVisitor {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  fn record_value(&mut self, field: &Field, value: LogValue) {
    if field.name() == "message" && self.message.is_none() {
      self.message = Some(value.to_string());
    } else {
      self.fields.insert(field.name().to_string(), value);
    }
  }

  /// `message key=value key=value`, keys sorted.
  pub(crate) fn into_line(self) -> String {
    let mut line = self.message.unwrap_or_default();
    for (key, value) in &self.fields {
      if !line.is_empty() {
        line.push(' ');
      }
      let _ = write!(line, "{}={}", key, value);
    }
    line
  }
}

impl Visit for LineVisitor {
  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    self.record_value(field, LogValue::Debug(format!("{:?}", value)));
  }

  fn record_str(&mut self, field: &Field, value: &str) {
    self.record_value(field, LogValue::String(value.to_string()));
  }

  fn record_i64(&mut self, field: &Field, value: i64) {
    self.record_value(field, LogValue::Int(value));
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    self.record_value(field, LogValue::from(value));
  }

  fn record_f64(&mut self, field: &Field, value: f64) {
    self.record_value(field, LogValue::Float(value));
  }

  fn record_bool(&mut self, field: &Field, value: bool) {
    self.record_value(field, LogValue::Bool(value));
  }
}
