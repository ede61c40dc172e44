//! Console `log` backend for headless runs. The viewer uses Bevy's own.

use log::{LevelFilter, Log, Metadata, Record};

pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the logger; a second call only updates the level
    pub fn init(level: LevelFilter) {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(level);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!(
            "{} {}:{} {}",
            record.level(),
            record.file().unwrap_or(""),
            record.line().unwrap_or(0),
            record.args()
        );
    }

    fn flush(&self) {}
}
