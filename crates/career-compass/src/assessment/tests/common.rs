use std::cell::RefCell;

use crate::assessment::domain::{AnswerOption, Career, Question};
use crate::assessment::{
    AssessmentAborted, AssessmentSession, CareerRegistry, QuestionSource, QuestionSourceError,
};

pub(super) const ENGINEER: &str = "Software Engineer";
pub(super) const DATA: &str = "Data Scientist";
pub(super) const DESIGN: &str = "UX Designer";
pub(super) const PRODUCT: &str = "Product Manager";

pub(super) fn session() -> AssessmentSession {
    let mut session = AssessmentSession::standard();
    session.begin(0);
    session
}

pub(super) fn session_with_scores(scores: &[(&str, i32)]) -> AssessmentSession {
    let mut session = session();
    for (career, score) in scores {
        session.apply_score(&AnswerOption::new("seed", [(*career, *score)]));
    }
    session
}

pub(super) fn three_way_registry() -> CareerRegistry {
    CareerRegistry::new(vec![
        Career::new("Alpha", "first", "$1"),
        Career::new("Beta", "second", "$2"),
        Career::new("Gamma", "third", "$3"),
    ])
}

pub(super) fn two_option_question(text: &str, first: AnswerOption, second: AnswerOption) -> Question {
    Question::new(text, vec![first, second])
}

/// Chooser that always takes the option whose text contains `needle`.
pub(super) fn pick_containing(
    needle: &'static str,
) -> impl FnMut(&Question) -> Result<AnswerOption, AssessmentAborted> {
    move |question: &Question| {
        question
            .options
            .iter()
            .find(|option| option.text.contains(needle))
            .cloned()
            .ok_or(AssessmentAborted::Cancelled)
    }
}

/// In-memory question source that records what was saved.
#[derive(Default)]
pub(super) struct MemorySource {
    pub(super) stored: RefCell<Option<String>>,
    pub(super) fail_saves: bool,
    pub(super) saved: RefCell<Vec<Vec<Question>>>,
}

impl MemorySource {
    pub(super) fn with_document(document: &str) -> Self {
        Self {
            stored: RefCell::new(Some(document.to_string())),
            ..Self::default()
        }
    }

    pub(super) fn read_only(document: Option<&str>) -> Self {
        Self {
            stored: RefCell::new(document.map(str::to_string)),
            fail_saves: true,
            ..Self::default()
        }
    }
}

impl QuestionSource for MemorySource {
    fn load(&self) -> Result<Vec<Question>, QuestionSourceError> {
        match self.stored.borrow().as_deref() {
            Some(document) => Ok(serde_json::from_str(document)?),
            None => Err(QuestionSourceError::Missing("memory".into())),
        }
    }

    fn save(&self, questions: &[Question]) -> Result<(), QuestionSourceError> {
        if self.fail_saves {
            return Err(QuestionSourceError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only storage",
            )));
        }
        let document = serde_json::to_string(questions)?;
        self.stored.replace(Some(document));
        self.saved.borrow_mut().push(questions.to_vec());
        Ok(())
    }
}
