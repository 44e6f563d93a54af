// Logger setup and conditional logging macros - the macros are only active in debug builds

use chrono::{DateTime, Local};
use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// `<cache dir>/hangman/hangman.log`
pub fn get_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("hangman").join("hangman.log"))
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn line_prefix(now: DateTime<Local>, level: Level) -> String {
    format!("{} {:<5}", now.format(TIMESTAMP_FORMAT), level)
}

/// Install the global logger.
///
/// `RUST_LOG` sets the filter (default `warn`); `verbose` forces debug.
/// With `log_to_file` output goes to [`get_log_path`] instead of stderr so
/// the full-screen interface is not overwritten, and logging is disabled if
/// that file cannot be opened.
pub fn init_logger(verbose: bool, log_to_file: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            line_prefix(Local::now(), record.level()),
            record.target(),
            record.args()
        )
    });

    if log_to_file {
        match get_log_path().as_deref().and_then(open_log_file) {
            Some(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(LevelFilter::Off);
            }
        }
    }

    // A logger may already be installed (tests)
    let _ = builder.try_init();
}
