use colored::Colorize;
use log::Level;
use log::LevelFilter;
use log::Metadata;
use log::Record;
use log::SetLoggerError;

struct SimpleLogger;

impl log::Log for SimpleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if self.enabled(record.metadata()) {
			let level = match record.level() {
				Level::Error => "ERROR".red(),
				Level::Warn => "WARN".yellow(),
				Level::Info => "INFO".green(),
				Level::Debug => "DEBUG".blue(),
				Level::Trace => "TRACE".magenta(),
			};
			println!("{} - {}", level, record.args());
		}
	}

	fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Installs the colored stdout logger. Fails if a logger is already set.
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
	log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}
