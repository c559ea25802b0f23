use crate::referential::TableSource;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub quiz: QuizConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("SORTING_HAT_DATA_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let source = match data_dir {
            Some(path) => QuizConfig::directory_source(path)?,
            None => TableSource::Bundled,
        };

        let long_quiz = env::var("SORTING_HAT_LONG_QUIZ")
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let log_level = env::var("SORTING_HAT_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            quiz: QuizConfig { source, long_quiz },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the tables live and which quiz length to run by default.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub source: TableSource,
    pub long_quiz: bool,
}

impl QuizConfig {
    pub fn directory_source(path: PathBuf) -> Result<TableSource, ConfigError> {
        if path.is_dir() {
            Ok(TableSource::Directory(path))
        } else {
            Err(ConfigError::DataDirNotFound { path })
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[derive(Debug)]
pub enum ConfigError {
    DataDirNotFound { path: PathBuf },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DataDirNotFound { path } => write!(
                f,
                "data directory {} does not exist or is not a directory",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
