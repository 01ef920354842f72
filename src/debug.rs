//! Debug log bridge for profile-toggle.
//!
//! Routes every `log::info!()` / `log::debug!()` etc. to a log file so that
//! stdout/stderr stay clean:
//!
//! - `/tmp/profile_toggle_debug.log` on Unix/macOS
//! - `%TEMP%\profile_toggle_debug.log` on Windows
//!
//! Level precedence: `--log-level` CLI flag, then `RUST_LOG`, then the config
//! `log_level` (applied after config load). When `RUST_LOG` is set, records
//! are also mirrored to stderr.

use parking_lot::Mutex;
use profile_toggle_config::LogLevel;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// `log` implementation writing to the debug log file
struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    /// Open (truncating) the log file if it is not open yet.
    fn ensure_file(&self) {
        let mut file = self.file.lock();
        if file.is_some() {
            return;
        }

        let log_path = log_path();
        match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&log_path)
        {
            Ok(mut f) => {
                let _ = f.write_all(
                    format!(
                        "\n{}\nprofile-toggle debug session started at {} (level={})\n{}\n",
                        "=".repeat(80),
                        get_timestamp(),
                        log::max_level(),
                        "=".repeat(80)
                    )
                    .as_bytes(),
                );
                *file = Some(f);
            }
            Err(e) => {
                if self.mirror_stderr {
                    eprintln!("profile-toggle: cannot open {}: {e}", log_path.display());
                }
            }
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Set when the CLI flag or `RUST_LOG` picked the level; config must not override it
static LEVEL_OVERRIDDEN: AtomicBool = AtomicBool::new(false);

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Parse a `RUST_LOG` value as a single global level.
///
/// Returns the level and whether the value was honoured as written. Module
/// directives such as `foo=debug` are not supported and fall back to `Info`.
fn parse_rust_log(value: &str) -> Option<(log::LevelFilter, bool)> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(level) => Some((level, true)),
        Err(_) => Some((log::LevelFilter::Info, false)),
    }
}

fn env_level() -> Option<log::LevelFilter> {
    let value = std::env::var("RUST_LOG").ok()?;
    let (level, honoured) = parse_rust_log(&value)?;
    if !honoured {
        eprintln!(
            "profile-toggle: RUST_LOG={value:?} is not a single level, using {level}"
        );
    }
    Some(level)
}

/// Location of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/profile_toggle_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("profile_toggle_debug.log")
    }
}

/// Install the log bridge. Safe to call more than once; later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let env = env_level();
    let level = match (cli_level, env) {
        (Some(cli), _) => Some(cli.to_level_filter()),
        (None, Some(env)) => Some(env),
        (None, None) => None,
    };
    LEVEL_OVERRIDDEN.store(level.is_some(), Ordering::Relaxed);
    let level = level.unwrap_or(log::LevelFilter::Off);

    let bridge = BRIDGE.get_or_init(|| LogBridge {
        file: Mutex::new(None),
        mirror_stderr: env.is_some(),
    });

    if log::set_logger(bridge).is_err() {
        return;
    }
    log::set_max_level(level);
    if level != log::LevelFilter::Off {
        bridge.ensure_file();
    }
}

/// Apply the config `log_level` unless the CLI or `RUST_LOG` already chose one.
pub fn apply_config_log_level(level: LogLevel) {
    if LEVEL_OVERRIDDEN.load(Ordering::Relaxed) {
        return;
    }
    let filter = level.to_level_filter();
    log::set_max_level(filter);
    if filter != log::LevelFilter::Off
        && let Some(bridge) = BRIDGE.get()
    {
        bridge.ensure_file();
    }
}

// Convenience macros for categorised logging
#[macro_export]
macro_rules! debug_error {
    ($category:expr, $($arg:tt)*) => {
        log::error!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_info {
    ($category:expr, $($arg:tt)*) => {
        log::info!(target: $category, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug_log {
    ($category:expr, $($arg:tt)*) => {
        log::debug!(target: $category, $($arg)*)
    };
}
