use serde_json::Value;
use std::fmt;

/// A dynamically typed argument for printf-style console calls.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
  String(String),
  Int(i64),
  Float(f64),
  Bool(bool),
  /// A pre-rendered `{:?}` representation.
  Debug(String),
}

impl LogValue {
  /// Captures the `Debug` rendering of any value.
  pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
    LogValue::Debug(format!("{:?}", value))
  }

  pub(crate) fn to_json(&self) -> Value {
    match self {
      LogValue::String(s) => Value::String(s.clone()),
      LogValue::Int(i) => Value::Number((*i).into()),
      LogValue::Float(f) => serde_json::Number::from_f64(*f)
        .map(Value::Number)
        .unwrap_or(Value::Null),
      LogValue::Bool(b) => Value::Bool(*b),
      LogValue::Debug(d) => Value::String(d.clone()),
    }
  }
}

impl fmt::Display for LogValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LogValue::String(s) => f.write_str(s),
      LogValue::Int(i) => write!(f, "{}", i),
      LogValue::Float(v) => write!(f, "{}", v),
      LogValue::Bool(b) => write!(f, "{}", b),
      LogValue::Debug(d) => f.write_str(d),
    }
  }
}

impl From<&str> for LogValue {
  fn from(value: &str) -> Self {
    LogValue::String(value.to_string())
  }
}

impl From<String> for LogValue {
  fn from(value: String) -> Self {
    LogValue::String(value)
  }
}

impl From<i64> for LogValue {
  fn from(value: i64) -> Self {
    LogValue::Int(value)
  }
}

impl From<i32> for LogValue {
  fn from(value: i32) -> Self {
    LogValue::Int(value.into())
  }
}

impl From<u32> for LogValue {
  fn from(value: u32) -> Self {
    LogValue::Int(value.into())
  }
}

impl From<u64> for LogValue {
  fn from(value: u64) -> Self {
    if value <= i64::MAX as u64 {
      LogValue::Int(value as i64)
    } else {
      LogValue::String(value.to_string())
    }
  }
}

impl From<usize> for LogValue {
  fn from(value: usize) -> Self {
    LogValue::from(value as u64)
  }
}

impl From<f64> for LogValue {
  fn from(value: f64) -> Self {
    LogValue::Float(value)
  }
}

impl From<bool> for LogValue {
  fn from(value: bool) -> Self {
    LogValue::Bool(value)
  }
}
