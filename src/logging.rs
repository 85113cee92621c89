//! Process-wide logging setup.
//!
//! Installs a `tracing` subscriber that writes one line per event to stdout in
//! the form `<time> - <name> - <LEVEL> - <message>`. The level comes from the
//! `LOGLEVEL` environment variable and defaults to `INFO`.
//!
//! SDK events are emitted through [`log_event`] and carry two structured
//! fields: `type` (a short machine-readable tag such as `FatalError`) and the
//! human-readable message.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding the log level.
pub const LOGLEVEL_ENV: &str = "LOGLEVEL";

/// Target (logger name) used for all SDK events.
pub const LOGGER_NAME: &str = "MerakiSDK";

/// Severity of an SDK log event.
///
/// Numeric values follow the conventional 10/20/30/40/50 scale so callers
/// can pass levels around as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Level {
    /// Parse a level name (`DEBUG`, `INFO`, `WARNING`/`WARN`, `ERROR`, `CRITICAL`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Some(Self::Debug),
            "INFO" => Some(Self::Info),
            "WARNING" | "WARN" => Some(Self::Warning),
            "ERROR" => Some(Self::Error),
            "CRITICAL" | "FATAL" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Map a numeric level to the closest named level at or below it.
    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            0..=9 => None,
            10..=19 => Some(Self::Debug),
            20..=29 => Some(Self::Info),
            30..=39 => Some(Self::Warning),
            40..=49 => Some(Self::Error),
            _ => Some(Self::Critical),
        }
    }

    /// The numeric value of this level.
    pub fn as_number(self) -> u8 {
        self as u8
    }

    fn filter(self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Critical => LevelFilter::ERROR,
        }
    }
}

/// Resolve the level filter from a raw `LOGLEVEL` value.
///
/// Accepts level names or numbers; anything else falls back to `INFO`.
pub fn level_filter(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|value| {
        Level::from_name(value).or_else(|| value.trim().parse().ok().and_then(Level::from_number))
    })
    .unwrap_or(Level::Info)
    .filter()
}

/// Initialize logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let level = level_filter(std::env::var(LOGLEVEL_ENV).ok().as_deref());

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stdout)
        .event_format(LineFormat)
        .try_init();
}

/// Emit a typed SDK log event.
///
/// # Example
///
/// ```
/// use meraki_sdk::logging::{log_event, Level};
///
/// log_event(Level::Info, "VerifySSL", "False");
/// ```
pub fn log_event(level: Level, message_type: &str, message: impl fmt::Display) {
    match level {
        Level::Debug => {
            tracing::debug!(target: LOGGER_NAME, r#type = %message_type, "{}", message)
        }
        Level::Info => tracing::info!(target: LOGGER_NAME, r#type = %message_type, "{}", message),
        Level::Warning => {
            tracing::warn!(target: LOGGER_NAME, r#type = %message_type, "{}", message)
        }
        Level::Error => {
            tracing::error!(target: LOGGER_NAME, r#type = %message_type, "{}", message)
        }
        Level::Critical => {
            tracing::error!(target: LOGGER_NAME, r#type = %message_type, critical = true, "{}", message)
        }
    }
}

/// `<time> - <target> - <LEVEL> - <fields>` line format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let level = if *metadata.level() == tracing::Level::WARN {
            "WARNING"
        } else {
            metadata.level().as_str()
        };

        write!(
            writer,
            "{} - {} - {} - ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            metadata.target(),
            level
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured(max: LevelFilter, f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max)
            .with_writer(move || writer.clone())
            .event_format(LineFormat)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_level_filter_defaults_to_info() {
        assert_eq!(level_filter(None), LevelFilter::INFO);
        assert_eq!(level_filter(Some("verbose")), LevelFilter::INFO);
        assert_eq!(level_filter(Some("")), LevelFilter::INFO);
    }

    #[test]
    fn test_level_filter_accepts_names_and_numbers() {
        assert_eq!(level_filter(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(level_filter(Some("WARNING")), LevelFilter::WARN);
        assert_eq!(level_filter(Some("CRITICAL")), LevelFilter::ERROR);
        assert_eq!(level_filter(Some("40")), LevelFilter::ERROR);
        assert_eq!(level_filter(Some("10")), LevelFilter::DEBUG);
    }

    #[test]
    fn test_level_numbers() {
        assert_eq!(Level::Error.as_number(), 40);
        assert_eq!(Level::from_number(20), Some(Level::Info));
        assert_eq!(Level::from_number(5), None);
        assert!(Level::Critical > Level::Warning);
    }

    #[test]
    fn test_log_event_line_format() {
        let output = captured(LevelFilter::DEBUG, || {
            log_event(Level::Error, "FatalError", "401 - Invalid API key");
        });

        assert!(output.contains(" - MerakiSDK - ERROR - "), "got: {output}");
        assert!(output.contains("401 - Invalid API key"));
        assert!(output.contains("FatalError"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_log_event_respects_level() {
        let output = captured(LevelFilter::INFO, || {
            log_event(Level::Debug, "Success", 200);
            log_event(Level::Warning, "Slow", "took a while");
        });

        assert!(!output.contains("Success"));
        assert!(output.contains(" - WARNING - "));
    }
}
