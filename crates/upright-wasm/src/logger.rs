//! `log` backend that writes to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&message),
            Level::Warn => web_sys::console::warn_1(&message),
            Level::Info => web_sys::console::info_1(&message),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls are ignored.
pub(crate) fn install(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Parse a level name; unknown names fall back to `warn`.
pub(crate) fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

/// Set the console log level ("off", "error", "warn", "info", "debug", "trace").
///
/// # Example (TypeScript)
///
/// ```typescript
/// set_log_level('debug'); // show which orientation tags get stripped
/// ```
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    log::set_max_level(parse_level(level));
}
