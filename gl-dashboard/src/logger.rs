use crate::error::{DashboardError, Result as DashboardErrorResult};

use gl_config::LogLevel;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::{Level, info};

/// Install the global logger.
///
/// Records go to `log_file` when set, otherwise to stderr so they never mix
/// with the dashboard text on stdout. `colored` only applies to stderr.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> DashboardErrorResult<()> {
    let (sink, colors): (Output, Option<ColoredLevelConfig>) = match log_file {
        Some(ref path) => (open_log_file(path)?.into(), None),
        None => (std::io::stderr().into(), colored.then(level_colors)),
    };

    Dispatch::new()
        .level(log_level.0)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {message} [{}]",
                humantime::format_rfc3339(SystemTime::now()),
                level_label(colors.as_ref(), record.level()),
                record.target(),
            ))
        })
        .chain(sink)
        .apply()
        .map_err(|e| DashboardError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    let destination = log_file
        .as_deref()
        .map_or_else(|| "stderr".to_string(), |path| path.display().to_string());
    info!("Logger initialized: level={}, sink={destination}", *log_level);

    Ok(())
}

fn open_log_file(path: &Path) -> DashboardErrorResult<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| DashboardError::Io {
            message: format!("Failed to open log file {}", path.display()),
            source: e,
        })
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// Level text for one record, colored when a palette is given
pub(crate) fn level_label(colors: Option<&ColoredLevelConfig>, level: Level) -> String {
    match colors {
        Some(colors) => colors.color(level).to_string(),
        None => level.to_string(),
    }
}
