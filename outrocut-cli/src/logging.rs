// ============================================================================
// outrocut-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Dispatch
//
// The core library and the CLI both emit through the `log` facade. This
// module installs a `fern` dispatcher with two outputs:
// - stderr: plain messages at info (debug and core details with --verbose)
// - optional log file: every debug message with timestamp, level and target,
//   ANSI styling stripped
//
// The terminal module renders its styled lines through `info!`, so the log
// file carries the same run summary the user saw.

use crate::error::{CliErrorContext, CliResult};
use log::{Level, LevelFilter};
use outrocut_core::CoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of a new log file in `log_dir`, named after the current time.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("outrocut_{}.log", get_timestamp()))
}

/// Installs the global logger. Returns the log file path when one was opened.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    let console_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    // Core milestones duplicate the CLI summary unless asked for.
    let core_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let console = fern::Dispatch::new()
        .format(|out, message, record| match record.level() {
            Level::Debug | Level::Trace => {
                out.finish(format_args!("[{}] {}", record.target(), message));
            }
            _ => out.finish(format_args!("{message}")),
        })
        .level(console_level)
        .level_for("outrocut_core", core_level)
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new().chain(console);

    let mut log_path = None;
    if let Some(dir) = log_dir {
        fs::create_dir_all(dir)
            .cli_with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let path = log_file_path(dir);
        let file = fern::log_file(&path)
            .cli_with_context(|| format!("Failed to open log file {}", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        strip_ansi_escapes::strip_str(message.to_string())
                    ));
                })
                .level(LevelFilter::Debug)
                .chain(file),
        );
        log_path = Some(path);
    }

    dispatch
        .apply()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logging: {e}")))?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(&ts[8..9], "_");
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_log_file_name() {
        let path = log_file_path(Path::new("/var/log/outrocut"));
        assert_eq!(path.parent(), Some(Path::new("/var/log/outrocut")));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("outrocut_"));
        assert!(name.ends_with(".log"));
    }
}
