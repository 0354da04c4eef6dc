//! Diagnostics emitted on the fallback path

use std::io::Write;
use std::sync::{Arc, Mutex};

use classifier::{classify, Tag};
use core_types::{JsError, JsValue};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines in memory
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, captured.contents())
}

#[cfg(test)]
mod fallback_logging_tests {
    use super::*;

    #[test]
    fn test_derived_name_is_traced() {
        let ctor = JsValue::function("MyClass", |_this, _args| Ok(JsValue::undefined()));
        let instance = ctor.construct(&[]).unwrap();
        let (tag, logs) = with_captured_logs(|| classify(&instance));
        assert_eq!(tag, "myclass");
        assert!(logs.contains("derived tag from constructor name"), "{}", logs);
        assert!(logs.contains("MyClass"), "{}", logs);
    }

    #[test]
    fn test_failed_lookup_is_logged_and_swallowed() {
        let hostile = JsValue::object();
        hostile.define_getter(
            "constructor",
            JsValue::method("get constructor", |_this, _args| {
                Err(JsError::type_error("trap"))
            }),
        );
        let (tag, logs) = with_captured_logs(|| classify(&hostile));
        assert_eq!(tag, Tag::Object);
        assert!(logs.contains("constructor lookup failed"), "{}", logs);
        assert!(logs.contains("trap"), "{}", logs);
    }

    #[test]
    fn test_fixed_tags_log_nothing() {
        let (tag, logs) = with_captured_logs(|| classify(&JsValue::array()));
        assert_eq!(tag, Tag::Array);
        assert!(logs.is_empty(), "{}", logs);
    }
}
