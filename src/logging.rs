use log::{LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {} - {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Initialize logging to stderr.
///
/// The level comes from the `BATTLESHIP_LOG` environment variable, falling
/// back to `warn`. `verbose` raises it to at least `debug`.
pub fn init_logging(verbose: bool) {
    let mut level = env::var("BATTLESHIP_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    if verbose {
        level = level.max(LevelFilter::Debug);
    }
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
