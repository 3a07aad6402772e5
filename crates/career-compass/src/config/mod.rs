use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_QUESTIONS_PATH: &str = "questions.json";
const DEFAULT_REPORTS_DIR: &str = "reports";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
    /// Display name used when the user does not supply one.
    pub default_user_name: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let questions_path = path_var("QUIZ_QUESTIONS_PATH", DEFAULT_QUESTIONS_PATH)?;
        let reports_dir = path_var("QUIZ_REPORTS_DIR", DEFAULT_REPORTS_DIR)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let default_user_name = env::var("QUIZ_USER_NAME")
            .ok()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            environment,
            storage: StorageConfig {
                questions_path,
                reports_dir,
            },
            telemetry: TelemetryConfig { log_level },
            default_user_name,
        })
    }
}

fn path_var(key: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { key }),
        Ok(value) => Ok(PathBuf::from(value.trim())),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Locations of the question source document and the saved report archive.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub questions_path: PathBuf,
    pub reports_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { key } => {
                write!(f, "{key} must not be blank when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("QUIZ_QUESTIONS_PATH");
        env::remove_var("QUIZ_REPORTS_DIR");
        env::remove_var("QUIZ_USER_NAME");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.storage.questions_path, PathBuf::from("questions.json"));
        assert_eq!(config.storage.reports_dir, PathBuf::from("reports"));
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.default_user_name.is_none());
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("QUIZ_QUESTIONS_PATH", "  data/custom.json ");
        env::set_var("QUIZ_USER_NAME", "  Ada ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.storage.questions_path, PathBuf::from("data/custom.json"));
        assert_eq!(config.default_user_name.as_deref(), Some("Ada"));
        reset_env();
    }

    #[test]
    fn rejects_blank_report_dir() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("QUIZ_REPORTS_DIR", "   ");
        let err = AppConfig::load().expect_err("blank dir rejected");
        assert!(matches!(
            err,
            ConfigError::EmptyPath {
                key: "QUIZ_REPORTS_DIR"
            }
        ));
        reset_env();
    }
}
