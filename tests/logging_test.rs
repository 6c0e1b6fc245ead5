use partialjson::{begin, record};
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex};

record! {
    #[derive(Debug, Default, Serialize)]
    struct Note {
        text: String,
    }
}

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    capture.text()
}

#[test]
fn test_to_json_logs_refusal() {
    let logs = capture_logs(|| {
        let mut note = Note::default();
        let builder = begin(&mut note).set("missing", 1_u8).unwrap();
        assert!(builder.to_json().is_err());
        assert!(builder.to_json_string().is_err());
    });

    assert_eq!(logs.matches("Refusing to encode").count(), 2, "{logs}");
    assert!(logs.contains("missing"), "{logs}");
}

#[test]
fn test_to_json_string_logs_encoded() {
    let logs = capture_logs(|| {
        let mut note = Note::default();
        let builder = begin(&mut note)
            .set("text", String::from("hi"))
            .unwrap()
            .partial();
        assert_eq!(builder.to_json_string().unwrap(), r#"{"text":"hi"}"#);
    });

    assert!(logs.contains("Encoded"), "{logs}");
    assert!(logs.contains("bytes=13"), "{logs}");
}
