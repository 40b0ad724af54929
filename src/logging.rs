#![cfg(feature = "std")]

use std::env;
use std::string::String;
use log::{self, LevelFilter, Metadata, Record};

const CRATE_PREFIX: &str = "sea_battle::";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the board display
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

/// `LEVEL [module] message`, with the crate prefix dropped from the module.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target.strip_prefix(CRATE_PREFIX).unwrap_or(target);
    std::format!("{:<5} [{}] {}", record.level(), module, record.args())
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Initialize logging with a level taken from the `SEA_BATTLE_LOG` environment variable.
/// Defaults to `warn` if the variable is not set or invalid.
pub fn init_logging() {
    let level = env::var("SEA_BATTLE_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn record_is_tagged_with_module() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("incomplete fleet, restarting"))
                .level(Level::Info)
                .target("sea_battle::fleet")
                .build(),
        );
        assert_eq!(line, "INFO  [fleet] incomplete fleet, restarting");

        let line = format_record(
            &Record::builder()
                .args(format_args!("x"))
                .level(Level::Debug)
                .target("other")
                .build(),
        );
        assert_eq!(line, "DEBUG [other] x");
    }
}
