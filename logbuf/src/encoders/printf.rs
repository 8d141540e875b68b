// src/encoders/printf.rs
use super::MessageFormatter;
use crate::error::Result;
use crate::model::LogValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

// One alternative per directive kind; `%%` is matched separately so that it never
// consumes an argument.
static DIRECTIVE_REGEX: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?P<directive>%(?P<converter>[sdifjoOc]))|(?P<escaped>%%)")
    .expect("Directive regex should be valid")
});

/// printf-style formatter over `LogValue` arguments.
///
/// When the first argument is a string it is treated as a template. Supported
/// directives:
///
/// - `%s` plain rendering
/// - `%d` number, `%i` integer (truncated), `%f` floating point
/// - `%j` JSON
/// - `%o` / `%O` debug rendering (strings in single quotes, or double quotes
///   when they contain a `'`)
/// - `%c` consumes an argument and prints nothing
/// - `%%` a literal percent sign
///
/// A template with no arguments after it is returned unchanged, `%%` included.
/// Otherwise a directive with no argument left to consume is kept verbatim. Unconsumed
/// arguments are appended, separated by spaces. If the first argument is not a
/// string, all arguments are space-joined.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintfFormatter;

impl PrintfFormatter {
  pub fn new() -> Self {
    Self
  }

  fn render_template(&self, out: &mut String, template: &str, args: &[LogValue]) -> usize {
    let mut consumed = 0;
    let mut last_end = 0;

    for caps in DIRECTIVE_REGEX.captures_iter(template) {
      let Some(mat) = caps.get(0) else { continue };
      out.push_str(&template[last_end..mat.start()]);
      last_end = mat.end();

      if caps.name("escaped").is_some() {
        out.push('%');
        continue;
      }

      let converter = caps
        .name("converter")
        .and_then(|m| m.as_str().chars().next())
        .unwrap_or('s');
      match args.get(consumed) {
        Some(arg) => {
          consumed += 1;
          write_directive(out, converter, arg);
        }
        None => out.push_str(mat.as_str()),
      }
    }

    out.push_str(&template[last_end..]);
    consumed
  }
}

impl MessageFormatter for PrintfFormatter {
  fn format_message(&self, args: &[LogValue]) -> Result<String> {
    let mut out = String::with_capacity(64);

    let rest = match args.first() {
      Some(LogValue::String(template)) if args.len() == 1 => return Ok(template.clone()),
      Some(LogValue::String(template)) => {
        let consumed = self.render_template(&mut out, template, &args[1..]);
        &args[1 + consumed..]
      }
      _ => {
        // No template: everything is an extra argument, including the first.
        if let Some(first) = args.first() {
          write_inspected(&mut out, first);
          &args[1..]
        } else {
          args
        }
      }
    };

    for arg in rest {
      out.push(' ');
      write_inspected(&mut out, arg);
    }

    Ok(out)
  }
}

fn write_directive(out: &mut String, converter: char, arg: &LogValue) {
  match converter {
    's' => {
      let _ = write!(out, "{}", arg);
    }
    'd' => match arg {
      LogValue::Int(i) => {
        let _ = write!(out, "{}", i);
      }
      other => write_number(out, to_number(other)),
    },
    'i' => match arg {
      LogValue::Int(i) => {
        let _ = write!(out, "{}", i);
      }
      other => write_number(out, to_number(other).trunc()),
    },
    'f' => write_number(out, to_number(arg)),
    'j' => {
      // Serializing a `serde_json::Value` cannot fail.
      let _ = write!(out, "{}", arg.to_json());
    }
    'o' | 'O' => match arg {
      LogValue::String(s) => write_quoted(out, s),
      other => {
        let _ = write!(out, "{}", other);
      }
    },
    'c' => {}
    _ => {
      let _ = write!(out, "{}", arg);
    }
  }
}

fn write_quoted(out: &mut String, s: &str) {
  if s.contains('\'') {
    let _ = write!(out, "{:?}", s);
  } else {
    out.push('\'');
    for c in s.chars() {
      match c {
        '"' => out.push(c),
        _ => {
          let _ = write!(out, "{}", c.escape_debug());
        }
      }
    }
    out.push('\'');
  }
}

// Extra arguments: strings verbatim, everything else through Display.
fn write_inspected(out: &mut String, arg: &LogValue) {
  let _ = write!(out, "{}", arg);
}

fn to_number(arg: &LogValue) -> f64 {
  match arg {
    LogValue::Int(i) => *i as f64,
    LogValue::Float(f) => *f,
    LogValue::Bool(b) => {
      if *b {
        1.0
      } else {
        0.0
      }
    }
    LogValue::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
    LogValue::Debug(_) => f64::NAN,
  }
}

fn write_number(out: &mut String, n: f64) {
  if n.is_infinite() {
    out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
  } else {
    // f64's Display already prints `3` for 3.0 and `NaN` for NaN.
    let _ = write!(out, "{}", n);
  }
}
