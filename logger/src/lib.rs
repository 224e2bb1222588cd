//! Grove's logging utilities.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    OnceLock,
};

use serde::{Deserialize, Serialize};
use tracing::subscriber::set_global_default;
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, instrument as log, trace, trace_span,
    warn, warn_span, Instrument,
};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

static LOGGER_SET: AtomicBool = AtomicBool::new(false);

/// Error raised when the global logger cannot be (re-)initialized.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// Works only once per process; all subsequent invocations fail.
    #[error("logger is already set")]
    AlreadySet,
}

/// Verbosity threshold of the logger.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum Level {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Convert [`Level`] to the corresponding `tracing` level.
pub fn into_tracing_level(level: Level) -> tracing::Level {
    match level {
        Level::Trace => tracing::Level::TRACE,
        Level::Debug => tracing::Level::DEBUG,
        Level::Info => tracing::Level::INFO,
        Level::Warn => tracing::Level::WARN,
        Level::Error => tracing::Level::ERROR,
    }
}

/// Output format of the logger.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum Format {
    #[default]
    Full,
    Compact,
    Pretty,
    Json,
}

/// Logger configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbosity threshold, overridable through the `GROVE_LOG` environment variable.
    pub level: Level,
    /// Output format.
    pub format: Format,
}

fn try_set_logger() -> Result<(), InitError> {
    if LOGGER_SET
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Err(InitError::AlreadySet);
    }
    Ok(())
}

/// Initializes the logger globally with the given [`Config`].
///
/// Works only once per process, all subsequent invocations will fail.
///
/// For usage in tests consider [`test_logger`].
///
/// # Errors
/// If the logger is already set.
pub fn init_global(configuration: &Config, terminal_colors: bool) -> Result<(), InitError> {
    try_set_logger()?;

    let level = into_tracing_level(configuration.level);
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var("GROVE_LOG")
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(terminal_colors)
        .with_test_writer();

    match configuration.format {
        Format::Full => set_global_default(builder.finish()),
        Format::Compact => set_global_default(builder.compact().finish()),
        Format::Pretty => set_global_default(builder.pretty().finish()),
        Format::Json => set_global_default(builder.json().finish()),
    }
    .map_err(|_| InitError::AlreadySet)
}

/// Returns the lazily initialised global logger for testing purposes.
///
/// # Panics
/// If [`init_global`] was called first.
pub fn test_logger() {
    static LOGGER: OnceLock<()> = OnceLock::new();

    LOGGER.get_or_init(|| {
        let config = Config {
            level: Level::Debug,
            format: Format::Pretty,
        };
        init_global(&config, true)
            .expect("`init_global()` should not be called before `test_logger()`");
    });
}

pub mod prelude {
    //! Module with most used items. Needs to be imported when using the `log` macro to avoid a
    //! direct `tracing` crate dependency.

    pub use tracing::{self, debug, error, info, instrument as log, span, trace, warn, Span};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).expect("config serializes");
        let parsed: Config = serde_json::from_str(&json).expect("config deserializes");
        assert_eq!(config, parsed);
        assert_eq!(parsed.level, Level::Info);
        assert_eq!(parsed.format, Format::Full);
    }

    #[test]
    fn level_parses_case_sensitively() {
        assert_eq!("DEBUG".parse::<Level>().expect("valid"), Level::Debug);
        assert!("debug".parse::<Level>().is_err());
    }

    #[test]
    fn second_init_fails() {
        test_logger();
        assert!(matches!(
            init_global(&Config::default(), false),
            Err(InitError::AlreadySet)
        ));
    }
}
