//! Routes `log` records into X-Plane's `Log.txt`.

use std::ffi::CString;

use log::{LevelFilter, Log, Metadata, Record};
use windpressure_core::logging::format_line;
use xplm_sys::XPLMDebugString;

struct DebugStringLogger;

static LOGGER: DebugStringLogger = DebugStringLogger;

impl Log for DebugStringLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), record.args());
        if let Ok(line) = CString::new(line) {
            unsafe { XPLMDebugString(line.as_ptr()) };
        }
    }

    fn flush(&self) {}
}

/// Install the logger at `level`.
pub fn init(level: LevelFilter) {
    // Already set if the host started us twice in one load; keep it.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
