//! Logging bridge for urxvt-launch.
//!
//! Routes all `log::warn!()` etc. to stderr, where a launcher's diagnostics
//! belong (stdout stays clean for anything the terminal prints itself).
//! Verbosity comes from repeated `-v` flags:
//! - 0: warnings and errors only
//! - 1: info
//! - 2: debug
//! - 3+: trace
//!
//! The `URXVT_LAUNCH_LOG` environment variable, when set to a level name
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`), takes precedence
//! over the flag count.

use log::{Level, LevelFilter, Metadata, Record};
use std::sync::OnceLock;

struct StderrLogger {
    level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        };
        eprintln!("urxvt-launch: {tag}: {}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. Safe to call more than once; only the first
/// call wins (the `log` facade allows a single global logger).
pub fn init(verbosity: u8) {
    let level = level_from_env()
        .unwrap_or_else(|| level_from_verbosity(verbosity));
    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Map `-v` flag count to a level filter.
fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Level override from `URXVT_LAUNCH_LOG`, if set and recognised.
fn level_from_env() -> Option<LevelFilter> {
    let value = std::env::var("URXVT_LAUNCH_LOG").ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        other => {
            eprintln!("urxvt-launch: warning: unknown URXVT_LAUNCH_LOG level {other:?}");
            None
        }
    }
}
