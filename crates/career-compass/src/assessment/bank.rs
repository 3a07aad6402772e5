use super::defaults::default_questions;
use super::domain::Question;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Load/save provider for the question source document.
pub trait QuestionSource {
    fn load(&self) -> Result<Vec<Question>, QuestionSourceError>;
    fn save(&self, questions: &[Question]) -> Result<(), QuestionSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionSourceError {
    #[error("question source {0} does not exist")]
    Missing(PathBuf),
    #[error("failed to access question source: {0}")]
    Io(#[from] std::io::Error),
    #[error("question source is not a valid question list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Question list stored as a pretty-printed JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileQuestionSource {
    path: PathBuf,
}

impl JsonFileQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for JsonFileQuestionSource {
    fn load(&self) -> Result<Vec<Question>, QuestionSourceError> {
        if !self.path.exists() {
            return Err(QuestionSourceError::Missing(self.path.clone()));
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, questions: &[Question]) -> Result<(), QuestionSourceError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut body = serde_json::to_string_pretty(questions)?;
        body.push('\n');
        fs::write(&self.path, body)?;
        Ok(())
    }
}

/// Why the built-in set was used instead of the external source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Missing,
    Unreadable(String),
    Malformed(String),
    Empty,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Missing => write!(f, "no custom question file was found"),
            FallbackReason::Unreadable(detail) => {
                write!(f, "the question file could not be read ({detail})")
            }
            FallbackReason::Malformed(detail) => {
                write!(f, "the question file is malformed ({detail})")
            }
            FallbackReason::Empty => write!(f, "the question file contains no questions"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOrigin {
    External,
    BuiltIn { reason: FallbackReason },
}

/// Questions for one run plus where they came from.
#[derive(Debug, Clone)]
pub struct LoadedQuestions {
    pub questions: Vec<Question>,
    pub origin: QuestionOrigin,
    /// Informational message for the presentation layer, set when falling back.
    pub notice: Option<String>,
}

pub struct QuestionBank;

impl QuestionBank {
    pub fn defaults() -> Vec<Question> {
        default_questions()
    }

    /// Load from `source`, falling back to the built-in set when the source is
    /// missing, unreadable, malformed, or empty. On fallback the defaults are
    /// written back to the source; a failed write is logged and ignored.
    pub fn load(source: &dyn QuestionSource) -> LoadedQuestions {
        let reason = match source.load() {
            Ok(questions) if !questions.is_empty() => {
                info!(questions = questions.len(), "loaded external question set");
                return LoadedQuestions {
                    questions,
                    origin: QuestionOrigin::External,
                    notice: None,
                };
            }
            Ok(_) => FallbackReason::Empty,
            Err(QuestionSourceError::Missing(_)) => FallbackReason::Missing,
            Err(QuestionSourceError::Io(err)) => FallbackReason::Unreadable(err.to_string()),
            Err(QuestionSourceError::Malformed(err)) => FallbackReason::Malformed(err.to_string()),
        };

        warn!(%reason, "falling back to built-in questions");
        let questions = default_questions();

        match source.save(&questions) {
            Ok(()) => debug!("built-in questions persisted for customization"),
            Err(err) => warn!(error = %err, "could not persist built-in questions; continuing"),
        }

        LoadedQuestions {
            questions,
            notice: Some(format!("Using the built-in question set: {reason}.")),
            origin: QuestionOrigin::BuiltIn { reason },
        }
    }
}
