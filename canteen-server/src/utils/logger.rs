//! Logging Infrastructure
//!
//! Structured logging via `tracing`. Development gets compact text on
//! stdout; production switches to one JSON object per line. Either format
//! can be redirected into daily rolling files under `LOG_DIR`.

use std::path::Path;

use tracing::Level;
use tracing_appender::rolling::RollingFileAppender;

/// Output format of the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn for_environment(is_production: bool) -> Self {
        if is_production { Self::Json } else { Self::Text }
    }
}

/// Parse a level name, falling back to `info`
fn parse_level(log_level: Option<&str>) -> Level {
    log_level
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::INFO)
}

/// Daily rolling appender, only when `log_dir` names an existing directory
fn file_appender(log_dir: Option<&str>) -> Option<RollingFileAppender> {
    let dir = Path::new(log_dir?);
    if !dir.is_dir() {
        return None;
    }
    Some(tracing_appender::rolling::daily(dir, "canteen-server"))
}

/// Initialize the global logger
///
/// Falls back to stdout when `log_dir` is missing or does not exist.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(parse_level(log_level))
        .with_target(false);

    match (format, file_appender(log_dir)) {
        (LogFormat::Json, Some(appender)) => builder.json().with_writer(appender).init(),
        (LogFormat::Json, None) => builder.json().init(),
        (LogFormat::Text, Some(appender)) => builder.with_writer(appender).with_ansi(false).init(),
        (LogFormat::Text, None) => builder.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_follows_environment() {
        assert_eq!(LogFormat::for_environment(true), LogFormat::Json);
        assert_eq!(LogFormat::for_environment(false), LogFormat::Text);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some("loud")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }

    #[test]
    fn test_file_appender_requires_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(file_appender(dir.path().to_str()).is_some());

        let missing = dir.path().join("missing");
        assert!(file_appender(missing.to_str()).is_none());
        assert!(file_appender(None).is_none());
    }
}
