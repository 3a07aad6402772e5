use crate::assessment::{AssessmentAborted, QuestionSourceError};
use crate::config::ConfigError;
use crate::history::ArchiveError;
use crate::mailer::MailError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Archive(ArchiveError),
    Questions(QuestionSourceError),
    Mail(MailError),
    Aborted(AssessmentAborted),
    AccessDenied,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Archive(err) => write!(f, "report archive error: {}", err),
            AppError::Questions(err) => write!(f, "question source error: {}", err),
            AppError::Mail(err) => write!(f, "mail error: {}", err),
            AppError::Aborted(err) => write!(f, "assessment aborted: {}", err),
            AppError::AccessDenied => write!(f, "access denied: incorrect admin password"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Archive(err) => Some(err),
            AppError::Questions(err) => Some(err),
            AppError::Mail(err) => Some(err),
            AppError::Aborted(err) => Some(err),
            AppError::AccessDenied => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ArchiveError> for AppError {
    fn from(value: ArchiveError) -> Self {
        Self::Archive(value)
    }
}

impl From<QuestionSourceError> for AppError {
    fn from(value: QuestionSourceError) -> Self {
        Self::Questions(value)
    }
}

impl From<MailError> for AppError {
    fn from(value: MailError) -> Self {
        Self::Mail(value)
    }
}

impl From<AssessmentAborted> for AppError {
    fn from(value: AssessmentAborted) -> Self {
        Self::Aborted(value)
    }
}
