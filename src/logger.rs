use log::LevelFilter;

/// Environment variable holding the log level filter (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "GL_TUTORIALS_LOG";

lazy_static::lazy_static! {
    pub static ref LOGGER: Logger = Logger {};
}

pub struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn flush(&self) {}

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!(
            "[{}] [{} > {:?}] {}",
            chrono::Local::now().format("%H:%M:%S"),
            record.metadata().target(),
            record.level(),
            record.args()
        );
    }
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs the global logger. Calling this more than once keeps the first logger.
pub fn init() {
    let level = parse_level(std::env::var(LOG_ENV).ok().as_deref());

    if log::set_logger(&*LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
