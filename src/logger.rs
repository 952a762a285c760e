use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes records to stderr as `[LEVEL] target: message`.
pub struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl StderrLogger {
    pub fn format(record: &Record) -> String {
        format!("[{}] {}: {}", record.level(), record.target(), record.args())
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Install the logger once per process. `Off` leaves stderr untouched.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
