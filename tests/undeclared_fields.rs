//! Undeclared-field policies, including the warning side channel.
use std::io;
use std::sync::{Arc, Mutex};

use json_shape::{Options, UnknownFieldPolicy, Validator};
use serde_json::json;

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

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.text())
}

#[test]
fn warn_policy_logs_and_passes() {
    let validator = Validator::new(Options::default().with_unknown_fields(UnknownFieldPolicy::Warn));
    let spec = json!({ "user$": { "id$": "string" } });
    let data = json!({ "user": { "id": "u1", "nickname": "z" }, "trace": true });

    let (outcome, logs) = with_captured_logs(|| validator.validate(&data, &spec));

    assert_eq!(outcome, Ok(()));
    assert!(logs.contains("user.nickname"), "logs: {logs}");
    assert!(logs.contains("trace"), "logs: {logs}");
    assert!(logs.contains("WARN"), "logs: {logs}");
}

#[test]
fn ignore_policy_is_silent() {
    let spec = json!({ "id$": "string" });
    let (outcome, logs) = with_captured_logs(|| Validator::default().validate(&json!({ "id": "a", "x": 1 }), &spec));
    assert_eq!(outcome, Ok(()));
    assert!(logs.is_empty(), "logs: {logs}");
}

#[test]
fn reject_policy_reports_first_undeclared_key() {
    let validator = Validator::new(Options::default().with_unknown_fields(UnknownFieldPolicy::Reject));
    let spec = json!({ "id$": "string", "meta": "object" });
    let err = validator
        .validate(&json!({ "id": "a", "meta": { "free": 1 }, "z": 1, "y": 2 }), &spec)
        .unwrap_err();
    // "object" leaves the inside of meta unchecked
    assert_eq!(err.to_string(), "Unknown field: z");
}

#[test]
fn spec_failures_win_over_undeclared_keys() {
    let validator = Validator::new(Options::default().with_unknown_fields(UnknownFieldPolicy::Reject));
    let err = validator
        .validate(&json!({ "extra": 1, "id": 5 }), &json!({ "id$": "string" }))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid type for id: expected string, got number");
}
