use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::env_provider::{EnvironmentProvider, SystemEnvironment};

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Logging configuration read from LOG_LEVEL and APP_LOG_FILE
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub log_level: String,
    pub app_log_file: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        let log_level = env_provider
            .get_var("LOG_LEVEL")
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let app_log_file = env_provider
            .get_var("APP_LOG_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            app_log_file,
        }
    }

    pub fn from_env() -> Self {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    /// Build the level filter, e.g. `INFO` or `widget_service=debug,poem=info`
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", self.log_level, e)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Install the global subscriber: console always, plus a daily-rolled file
/// when APP_LOG_FILE is set
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env();
    let env_filter = config.env_filter()?;

    let console_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter.clone());

    let subscriber = tracing_subscriber::registry().with(console_layer);

    match &config.app_log_file {
        Some(log_file_path) => {
            let directory = log_file_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(directory)?;

            let file_name = log_file_path.file_name().ok_or_else(|| {
                LoggingError::InitializationError("Invalid log file path".to_string())
            })?;
            let file_appender = tracing_appender::rolling::daily(directory, file_name);

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter);

            subscriber
                .with(file_layer)
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
        None => {
            subscriber
                .try_init()
                .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    fn config_with(vars: &[(&str, &str)]) -> LoggingConfig {
        LoggingConfig::from_env_provider(Arc::new(MockEnvironment::empty().with_vars(vars)))
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = config_with(&[]);

        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_log_file, None);
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_logging_config_from_env() {
        let config = config_with(&[
            ("LOG_LEVEL", "widget_service=debug,poem=info"),
            ("APP_LOG_FILE", "logs/widget-service.log"),
        ]);

        assert_eq!(config.log_level, "widget_service=debug,poem=info");
        assert_eq!(config.app_log_file, Some(PathBuf::from("logs/widget-service.log")));
        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_with(&[("LOG_LEVEL", "  "), ("APP_LOG_FILE", "")]);

        assert_eq!(config.log_level, "INFO");
        assert_eq!(config.app_log_file, None);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let config = config_with(&[("LOG_LEVEL", "widget_service=verbose")]);

        assert!(matches!(config.env_filter(), Err(LoggingError::InvalidLogLevel(_))));
    }
}
