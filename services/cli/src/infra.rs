use career_compass::assessment::{JsonFileQuestionSource, LoadedQuestions, QuestionBank};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::history::ReportArchive;
use career_compass::mailer::SimulatedMailer;
use std::path::PathBuf;

/// Admin gate for report history.
pub(crate) const ADMIN_PASSWORD: &str = "admin123";

/// Wiring shared by every command: storage locations, mail transport, display name.
pub(crate) struct AppContext {
    pub(crate) questions: JsonFileQuestionSource,
    pub(crate) archive: ReportArchive,
    pub(crate) mailer: SimulatedMailer,
    pub(crate) user_name: Option<String>,
}

impl AppContext {
    pub(crate) fn from_config(
        config: &AppConfig,
        questions_path: Option<PathBuf>,
        reports_dir: Option<PathBuf>,
        user_name: Option<String>,
    ) -> Self {
        let questions_path = questions_path.unwrap_or_else(|| config.storage.questions_path.clone());
        let reports_dir = reports_dir.unwrap_or_else(|| config.storage.reports_dir.clone());

        Self {
            questions: JsonFileQuestionSource::new(questions_path),
            archive: ReportArchive::new(reports_dir),
            mailer: SimulatedMailer::default(),
            user_name: user_name.or_else(|| config.default_user_name.clone()),
        }
    }

    pub(crate) fn load_questions(&self) -> LoadedQuestions {
        QuestionBank::load(&self.questions)
    }
}

pub(crate) fn verify_admin(password: &str) -> Result<(), AppError> {
    if password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(AppError::AccessDenied)
    }
}
