//! Console Logger
//!
//! A `log` backend that writes to the browser console and keeps the most
//! recent lines in a circular buffer so they can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of formatted lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console sink with a bounded history of formatted lines
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            history: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.history.lock() {
            Ok(history) => history.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn remember(&self, line: String) {
        let mut history = match self.history.lock() {
            Ok(history) => history,
            Err(poisoned) => poisoned.into_inner(),
        };
        if history.len() == self.capacity {
            history.pop_front();
        }
        history.push_back(line);
    }
}

/// Render a record as `[target] LEVEL message`
pub fn format_record(record: &Record) -> String {
    format!("[{}] {} {}", record.target(), record.level(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global logger at `level`.
///
/// Only the first call succeeds; later calls return the `SetLoggerError`
/// from `log` and leave the installed logger untouched.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines buffered by the global logger, empty before `init`
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("admin_ui::navbar")
                .build(),
        );
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("no element with id `menu`"))
                .level(Level::Warn)
                .target("admin_ui::navbar")
                .build(),
        );
        assert_eq!(line, "[admin_ui::navbar] WARN no element with id `menu`");
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 8);
        log_line(&logger, Level::Debug, "hidden");
        log_line(&logger, Level::Info, "shown");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].ends_with("shown"));
    }

    // The only test touching the global logger; `log` allows one per process
    #[test]
    fn test_global_logger() {
        assert!(recent().is_empty());
        init_with_capacity(LevelFilter::Info, 2).unwrap();
        assert!(init(LevelFilter::Trace).is_err());

        log::debug!("dropped");
        log::info!(target: "admin_ui", "first");
        log::warn!(target: "admin_ui", "second");
        log::error!(target: "admin_ui", "third");

        assert_eq!(recent(), vec!["[admin_ui] WARN second", "[admin_ui] ERROR third"]);
    }

    #[test]
    fn test_history_is_bounded() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            log_line(&logger, Level::Info, &format!("line {}", i));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_zero_capacity_keeps_last_line() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 0);
        log_line(&logger, Level::Error, "first");
        log_line(&logger, Level::Error, "second");

        assert_eq!(logger.recent().len(), 1);
        assert!(logger.recent()[0].ends_with("second"));
    }
}
