use std::io::IsTerminal;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// The logging verbosity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Messages relevant to the average user.
    #[default]
    Info,
    /// Messages relevant for debugging.
    Debug,
    /// Full auxiliary information.
    Trace,
}

impl LogLevel {
    fn level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Controls the log format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Auto detect the best format.
    ///
    /// This chooses [`LogFormat::Pretty`] for TTY, otherwise
    /// [`LogFormat::Simplified`].
    #[default]
    Auto,

    /// Pretty printing with colors.
    Pretty,

    /// Simplified plain text output.
    Simplified,

    /// Newline-delimited JSON records.
    Json,
}

/// Controls the logging system.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// The maximum level to log.
    pub level: LogLevel,

    /// The log output format.
    pub format: LogFormat,
}

/// Initializes the logging system.
///
/// The configured level acts as the default; the `RUST_LOG` environment
/// variable overrides it with standard filter directives. Repeated calls
/// after the first are no-ops.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::builder()
        .with_default_directive(config.level.level_filter().into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.format {
        LogFormat::Auto if std::io::stderr().is_terminal() => {
            builder.with_writer(std::io::stderr).pretty().try_init().ok();
        }
        LogFormat::Pretty => {
            builder.with_writer(std::io::stderr).pretty().try_init().ok();
        }
        LogFormat::Auto | LogFormat::Simplified => {
            builder.with_writer(std::io::stderr).compact().try_init().ok();
        }
        LogFormat::Json => {
            builder.with_writer(std::io::stderr).json().try_init().ok();
        }
    }
}
