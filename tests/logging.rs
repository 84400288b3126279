use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use sample_math::{add_with, OverflowPolicy};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn captured() -> &'static CaptureLogger {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Trace);
    });
    &LOGGER
}

fn has_record(logger: &CaptureLogger, level: Level, message: &str) -> bool {
    logger
        .records
        .lock()
        .unwrap()
        .iter()
        .any(|(l, m)| *l == level && m == message)
}

#[test]
fn checked_overflow_logs_debug() {
    let logger = captured();
    assert!(add_with(OverflowPolicy::Checked, i32::MAX, 7).is_err());
    assert!(has_record(
        logger,
        Level::Debug,
        "overflow adding 2147483647 and 7"
    ));
}

#[test]
fn policy_addition_logs_trace() {
    let logger = captured();
    assert_eq!(add_with(OverflowPolicy::Saturating, 40, 2), Ok(42));
    assert!(has_record(logger, Level::Trace, "add 40 + 2 (saturating)"));
    assert!(!has_record(
        logger,
        Level::Debug,
        "overflow adding 40 and 2"
    ));
}
