//! Tests for the diagnostic records written by `create_or_log`.

use std::io;
use std::sync::{Arc, Mutex};

use safehtml::attributes::{class, on};
use safehtml::{SafeNode, create_or_log, try_create};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a WARN-level subscriber and return the lines it logged.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_target(true)
        .with_max_level(tracing::Level::WARN)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let bytes = sink.0.lock().unwrap().clone();
    let lines = String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    (out, lines)
}

#[test]
fn test_refusal_logs_one_record() {
    let (node, lines) = capture(|| create_or_log::<()>("script", [], []));

    assert_eq!(node, SafeNode::empty());
    assert_eq!(node.as_raw().as_text(), Some(""));

    assert_eq!(lines.len(), 1, "expected one record, got {lines:#?}");
    assert!(lines[0].contains("WARN"));
    assert!(lines[0].contains("safehtml::unsafe_usage"));
    assert!(lines[0].contains("script"));
}

#[test]
fn test_record_lists_attributes_and_children() {
    let (_, lines) = capture(|| {
        let child = try_create("i", [], [SafeNode::text("inner")]).unwrap();
        create_or_log("script", [class("boot"), on("load", 1u8)], [child])
    });

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("boot"));
    assert!(lines[0].contains("on:load"));
    assert!(lines[0].contains("<i>inner</i>"));
}

#[test]
fn test_success_logs_nothing() {
    let (node, lines) = capture(|| create_or_log::<()>("div", [], [SafeNode::text("ok")]));

    assert_eq!(node.to_html(), "<div>ok</div>");
    assert!(lines.is_empty(), "unexpected records: {lines:#?}");
}
