use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct ArenaLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

/// Pulls the number following `label` out of a message, e.g. "Round 12".
fn number_after(message: &str, label: &str) -> Option<u32> {
    let start = message.find(label)? + label.len();
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

// Implement the log::Log trait for our custom logger
impl log::Log for ArenaLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.level() > self.level {
            return false;
        }
        // Debug topics are opt-in once a filter is given
        if let Some(filters) = &self.debug_filters {
            if metadata.level() >= log::Level::Debug {
                return filters.iter().any(|f| metadata.target().starts_with(f.as_str()));
            }
        }
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let mut context = String::new();
        if let Some(round) = number_after(&message, "Round ") {
            context.push_str(&format!("[T{:03}] ", round));
        }

        let output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        // A closed stdout is not worth crashing the simulation over
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<ArenaLogger> = OnceLock::new();

/// Installs the arena logger.
///
/// `debug_filter` is a comma separated list of topics (`arena`, `radar`,
/// `move`, `weapon`, `robot`); when present, debug and trace output is
/// limited to those topics.
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    });

    let logger = LOGGER.get_or_init(|| ArenaLogger {
        level,
        debug_filters,
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Parses a `--log-level` value, falling back to info.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_radar {
    ($fmt:literal $($arg:tt)*) => {
        log::debug!(target: "radar", $fmt $($arg)*)
    };
    ($robot_id:expr, $fmt:literal $($arg:tt)*) => {
        log::debug!(target: "radar", "[R{:02}] {}", $robot_id, format_args!($fmt $($arg)*))
    };
}

#[macro_export]
macro_rules! debug_move {
    ($fmt:literal $($arg:tt)*) => {
        log::debug!(target: "move", $fmt $($arg)*)
    };
    ($robot_id:expr, $fmt:literal $($arg:tt)*) => {
        log::debug!(target: "move", "[R{:02}] {}", $robot_id, format_args!($fmt $($arg)*))
    };
}

#[macro_export]
macro_rules! debug_weapon {
    ($fmt:literal $($arg:tt)*) => {
        log::debug!(target: "weapon", $fmt $($arg)*)
    };
    ($robot_id:expr, $fmt:literal $($arg:tt)*) => {
        log::debug!(target: "weapon", "[R{:02}] {}", $robot_id, format_args!($fmt $($arg)*))
    };
}

#[macro_export]
macro_rules! debug_robot {
    ($fmt:literal $($arg:tt)*) => {
        log::debug!(target: "robot", $fmt $($arg)*)
    };
    ($robot_id:expr, $fmt:literal $($arg:tt)*) => {
        log::debug!(target: "robot", "[R{:02}] {}", $robot_id, format_args!($fmt $($arg)*))
    };
}
