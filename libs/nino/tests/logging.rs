//! Rejections emit trace events without leaking the identifier.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use nino_checker::{validate_nino, Trn};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let writer = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}

#[test]
fn rejection_logs_reason_not_input() {
    let output = capture(|| {
        let _ = validate_nino("BG654321A");
    });
    assert!(output.contains("Invalid prefix"), "{output}");
    assert!(!output.contains("BG654321A"), "{output}");
}

#[test]
fn valid_input_logs_nothing() {
    let output = capture(|| {
        let _ = validate_nino("AB123456C");
    });
    assert!(output.is_empty(), "{output}");
}

#[test]
fn trn_rejection_hides_input() {
    let output = capture(|| {
        let _ = Trn::parse("99 q9 99 9");
    });
    assert!(output.contains("rejected temporary reference number"), "{output}");
    assert!(!output.contains("99 q9 99 9"), "{output}");
}
