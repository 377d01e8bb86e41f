//! Logging integration tests — custom logger installation through the public
//! API. Serialized because the logger slot is process-wide.

use aurora_3d_engine::aurora3d::log::{LogEntry, LogSeverity, Logger};
use aurora_3d_engine::aurora3d::Engine;
use serial_test::serial;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    entries: Arc<Mutex<Vec<(LogSeverity, String, String)>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push((
            entry.severity,
            entry.source.clone(),
            entry.message.clone(),
        ));
    }
}

#[test]
#[serial]
fn custom_logger_receives_engine_logs() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    Engine::log(LogSeverity::Debug, "aurora3d::it", "direct entry".to_string());
    Engine::initialize(); // logs an Info line

    let captured = entries.lock().unwrap();
    assert!(captured
        .iter()
        .any(|(sev, src, msg)| *sev == LogSeverity::Debug
            && src == "aurora3d::it"
            && msg == "direct entry"));
    assert!(captured
        .iter()
        .any(|(sev, src, _)| *sev == LogSeverity::Info && src == "aurora3d::Engine"));
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn detailed_log_carries_location() {
    struct LocationLogger {
        has_location: Arc<Mutex<bool>>,
    }
    impl Logger for LocationLogger {
        fn log(&self, entry: &LogEntry) {
            if entry.file.is_some() && entry.line.is_some() {
                *self.has_location.lock().unwrap() = true;
            }
        }
    }

    let has_location = Arc::new(Mutex::new(false));
    Engine::set_logger(LocationLogger { has_location: Arc::clone(&has_location) });

    Engine::log_detailed(
        LogSeverity::Error,
        "aurora3d::it",
        "with location".to_string(),
        file!(),
        line!(),
    );

    assert!(*has_location.lock().unwrap());
    Engine::reset_logger();
}
