mod common;
use common::*;

use fibre_logbuf::{BufferConfig, BufferedConsole, Channel, ChannelSinks, LogValue, MemorySink, Prefix};
use pretty_assertions::assert_eq;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

#[test]
fn limit_crossing_flushes_exact_payload() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(20));

  console.log(format_args!("{}", "a".repeat(10))).unwrap();
  console.log(format_args!("{}", "b".repeat(10))).unwrap();
  assert_eq!(sinks.total_writes(), 0);

  console.log(format_args!("c")).unwrap();
  assert_eq!(sinks.log.payloads(), vec!["aaaaaaaaaa\nbbbbbbbbbb\nc".to_string()]);
  assert_eq!(console.pending_size(Channel::Log), 0);
  assert!(console.buffered(Channel::Log).is_empty());
}

#[test]
fn nothing_is_written_below_limit_until_drop() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(1024));

  for i in 0..10 {
    console.log(format_args!("log {}", i)).unwrap();
    console.info(format_args!("info {}", i)).unwrap();
    console.warn(format_args!("warn {}", i)).unwrap();
    console.error(format_args!("error {}", i)).unwrap();
  }
  assert_eq!(sinks.total_writes(), 0);

  drop(console);

  for channel in Channel::ALL {
    let expected: Vec<String> = (0..10).map(|i| format!("{} {}", channel, i)).collect();
    assert_eq!(
      sinks.get(channel).payloads(),
      vec![expected.join("\n")],
      "channel {}",
      channel
    );
  }
}

#[test]
fn threshold_flushes_every_channel() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(8));

  console.info(format_args!("i")).unwrap();
  console.warn(format_args!("w")).unwrap();
  assert_eq!(sinks.total_writes(), 0);

  console.error(format_args!("0123456789")).unwrap();

  assert_eq!(sinks.info.payloads(), vec!["i".to_string()]);
  assert_eq!(sinks.warn.payloads(), vec!["w".to_string()]);
  assert_eq!(sinks.error.payloads(), vec!["0123456789".to_string()]);
  // Nothing was buffered on `log`, so its sink is left alone.
  assert_eq!(sinks.log.writes(), 0);
  for channel in Channel::ALL {
    assert_eq!(console.pending_size(channel), 0);
  }
}

#[test]
fn channels_do_not_leak_into_each_other() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(10));

  console.warn(format_args!("keep-me")).unwrap();
  console.log(format_args!("aaaaaa")).unwrap();
  console.log(format_args!("bbbbbb")).unwrap();

  assert_eq!(sinks.warn.payloads(), vec!["keep-me".to_string()]);
  assert_eq!(sinks.log.payloads(), vec!["aaaaaa\nbbbbbb".to_string()]);

  console.warn(format_args!("later")).unwrap();
  console.flush().unwrap();
  assert_eq!(
    sinks.warn.payloads(),
    vec!["keep-me".to_string(), "later".to_string()]
  );
}

#[test]
fn empty_flush_makes_no_sink_calls() {
  let (console, sinks) = build_test_console(BufferConfig::default());
  console.flush().unwrap();
  console.log(format_args!("x")).unwrap();
  console.flush().unwrap();
  console.flush().unwrap();
  assert_eq!(sinks.total_writes(), 1);
}

#[test]
fn sizing_counts_utf8_bytes() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(5));

  // Three characters, six bytes.
  console.info(format_args!("ééé")).unwrap();

  assert_eq!(sinks.info.payloads(), vec!["ééé".to_string()]);
}

#[test]
fn sizing_of_multibyte_entries_below_limit() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(6));
  console.info(format_args!("✓✓")).unwrap();
  assert_eq!(console.pending_size(Channel::Info), 6);
  assert_eq!(sinks.total_writes(), 0);
}

#[test]
fn static_prefix_starts_every_entry() {
  let (console, sinks) = build_test_console(BufferConfig::new().prefix("P: "));
  console.log(format_args!("one")).unwrap();
  console
    .write_values(Channel::Log, &["Hello %s!".into(), "world".into()])
    .unwrap();
  console.flush().unwrap();

  assert_eq!(sinks.log.payloads(), vec!["P: one\nP: Hello world!".to_string()]);
}

#[test]
fn prefix_bytes_count_toward_limit() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(5).prefix("P: "));
  console.log(format_args!("abc")).unwrap();
  assert_eq!(sinks.log.payloads(), vec!["P: abc".to_string()]);
}

#[test]
fn dynamic_prefix_reflects_call_time() {
  let clock = Arc::new(AtomicUsize::new(100));
  let reader = clock.clone();
  let (console, sinks) = build_test_console(
    BufferConfig::new().prefix(Prefix::dynamic(move || format!("[t={}] ", reader.load(Ordering::SeqCst)))),
  );

  console.info(format_args!("first")).unwrap();
  clock.store(200, Ordering::SeqCst);
  console.info(format_args!("second")).unwrap();
  clock.store(300, Ordering::SeqCst);
  console.flush().unwrap();

  assert_eq!(
    sinks.info.payloads(),
    vec!["[t=100] first\n[t=200] second".to_string()]
  );
}

#[test]
fn reconfigure_neither_loses_nor_duplicates() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(1000));
  console.log(format_args!("a")).unwrap();
  console.configure(BufferConfig::new().limit(1000));
  console.configure(BufferConfig::new().limit(1000).prefix(">"));
  console.log(format_args!("b")).unwrap();
  drop(console);

  assert_eq!(sinks.log.payloads(), vec!["a\n>b".to_string()]);
}

#[test]
fn printf_values_follow_directives() {
  let (console, sinks) = build_test_console(BufferConfig::default());
  console
    .write_values(
      Channel::Error,
      &[
        "%s failed with code %d (%j)".into(),
        "job".into(),
        7.into(),
        LogValue::from("x"),
        "extra".into(),
      ],
    )
    .unwrap();
  console.flush().unwrap();

  assert_eq!(
    sinks.error.payloads(),
    vec!["job failed with code 7 (\"x\") extra".to_string()]
  );
}

#[test]
fn concurrent_writers_keep_per_thread_order() {
  let (console, sinks) = build_test_console(BufferConfig::new().limit(64));
  let console = Arc::new(console);

  let handles: Vec<_> = (0..4)
    .map(|t| {
      let console = console.clone();
      std::thread::spawn(move || {
        for i in 0..200 {
          console.log(format_args!("{}:{}", t, i)).unwrap();
        }
      })
    })
    .collect();
  for handle in handles {
    handle.join().unwrap();
  }
  console.flush().unwrap();

  let lines: Vec<String> = sinks
    .log
    .payloads()
    .iter()
    .flat_map(|p| p.split('\n').map(str::to_string).collect::<Vec<_>>())
    .collect();
  assert_eq!(lines.len(), 800);

  for t in 0..4 {
    let prefix = format!("{}:", t);
    let seq: Vec<usize> = lines
      .iter()
      .filter_map(|l| l.strip_prefix(&prefix))
      .map(|n| n.parse().unwrap())
      .collect();
    assert_eq!(seq, (0..200).collect::<Vec<_>>(), "thread {}", t);
  }
}

#[test]
fn limit_crossed_during_running_flush_is_flushed_before_return() {
  let (started_tx, started_rx) = mpsc::channel();
  let started_tx = Mutex::new(started_tx);
  let slow_log = move |_payload: &str| -> io::Result<()> {
    let _ = started_tx.lock().unwrap().send(());
    thread::sleep(Duration::from_millis(300));
    Ok(())
  };
  let info = MemorySink::new();
  let console = Arc::new(BufferedConsole::with_config(
    ChannelSinks::uniform(info.clone()).with(Channel::Log, slow_log),
    BufferConfig::new().limit(4),
  ));

  let writer = {
    let console = console.clone();
    thread::spawn(move || console.log(format_args!("aaaaa")))
  };
  // The writer thread now holds the flush and sits inside the slow sink.
  started_rx.recv().unwrap();
  console.info(format_args!("bbbbb")).unwrap();
  writer.join().unwrap().unwrap();

  assert_eq!(console.pending_size(Channel::Info), 0);
  assert!(console.buffered(Channel::Info).is_empty());
  assert_eq!(info.payloads(), vec!["bbbbb".to_string()]);
}
