//! Logging backend
//!
//! Library code logs through the `log` facade. Hosts that do not install
//! their own logger can call [`init`] to get `[Level] message` lines on
//! stderr.

use log::{LevelFilter, Log, Metadata, Record};

/// Log levels in host settings order
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Nothing = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
    All = 5,
}

impl LogLevel {
    /// Create a LogLevel from an integer
    pub fn from_i32(level: i32) -> Self {
        match level {
            0 => LogLevel::Nothing,
            1 => LogLevel::Error,
            2 => LogLevel::Warning,
            3 => LogLevel::Info,
            4 => LogLevel::Debug,
            5 => LogLevel::All,
            _ => LogLevel::Info,
        }
    }

    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Matching `log` crate filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Nothing => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::All => LevelFilter::Trace,
        }
    }
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger and set the maximum level
///
/// Returns an error if another logger is already installed; the level
/// is applied either way.
pub fn init(level: LogLevel) -> Result<(), log::SetLoggerError> {
    log::set_max_level(level.to_level_filter());
    log::set_logger(&LOGGER)
}
