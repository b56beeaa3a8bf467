//! Stderr logger installed by the CLI

use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes records to stderr as `[LEVEL] message`
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install a logger as the global one and return it for explicit use
    pub fn install(level: LevelFilter) -> Result<&'static StderrLogger, SetLoggerError> {
        let logger: &'static StderrLogger = Box::leak(Box::new(StderrLogger::new(level)));
        log::set_logger(logger)?;
        log::set_max_level(level);
        Ok(logger)
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
