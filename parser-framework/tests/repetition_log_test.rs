//! Warnings logged when a repeated parser stops making progress.

use log::{Level, LevelFilter, Log, Metadata, Record};
use parser_framework::{always, many, many1, run, set_label};
use std::sync::{Mutex, Once};

struct CapturingLogger {
    warnings: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(record.args().to_string());
            }
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    warnings: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn install_logger() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Warn);
    });
}

fn warnings_mentioning(label: &str) -> usize {
    let warnings = LOGGER.warnings.lock().expect("logger poisoned");
    warnings
        .iter()
        .filter(|w| w.contains(&format!("'{label}'")) && w.contains("stopping repetition"))
        .count()
}

#[test]
fn test_many1_warns_when_first_item_consumes_nothing() {
    install_logger();
    let parser = many1(set_label(always('x'), "empty-first"));
    assert_eq!(run(&parser, "abc").into_value(), Some(vec!['x']));
    assert_eq!(warnings_mentioning("empty-first"), 1);
}

#[test]
fn test_many_warns_when_item_consumes_nothing() {
    install_logger();
    let parser = many(set_label(always(1), "empty-many"));
    assert_eq!(run(&parser, "").into_value(), Some(vec![1]));
    assert_eq!(warnings_mentioning("empty-many"), 1);
}
