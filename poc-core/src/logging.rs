use env_logger::Target;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default log location for interactive sessions (relative to the output dir).
pub const DEFAULT_LOG_FILE: &str = "poc-assistant.log";

/// Initialise the global logger at `level`.
///
/// With a path, logs are appended to that file; the TUI relies on this since
/// anything written to stderr would tear the alternate screen. If the file
/// cannot be opened we fall back to stderr.
pub fn init_with(log_file: Option<PathBuf>, level: log::LevelFilter) {
    let target = log_file
        .as_deref()
        .and_then(|path| open_log_file(path).ok())
        .map(|file| Target::Pipe(Box::new(file)))
        .unwrap_or(Target::Stderr);

    // try_init: tests and the dump path may initialise more than once.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(target)
        .try_init();
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Parse a textual level (`"debug"`, `"warn"`, ...); unknown values map to Info.
pub fn parse_level(raw: &str) -> log::LevelFilter {
    raw.trim().parse().unwrap_or(log::LevelFilter::Info)
}
