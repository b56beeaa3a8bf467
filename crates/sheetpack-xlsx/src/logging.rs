//! Records sent to an injected logger
//!
//! The validator and the viewer launcher report through a `&dyn Log` handed
//! to them. [`MemoryLogger`] keeps those records in memory, for callers that
//! want to collect a validation report rather than print it.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use log::{Level, Log, Metadata, Record};

pub(crate) const TARGET: &str = "sheetpack";

/// Send one record to `logger`, bypassing the global logger
pub(crate) fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .args(args)
            .level(level)
            .target(TARGET)
            .module_path_static(Some(module_path!()))
            .build(),
    );
}

/// Logger that keeps every record it receives
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    /// Create an empty logger
    pub fn new() -> Self {
        Self::default()
    }

    /// All records received so far, oldest first
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages logged at error level
    pub fn errors(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg)
            .collect()
    }
}

impl Log for MemoryLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}
