//! Scoring core: registry, question bank, scoring, ranking with tie-break, and the
//! orchestrator that ties them together for one run.

mod bank;
mod defaults;
pub mod domain;
mod orchestrator;
pub mod ranking;
mod registry;
mod result;
mod scoring;
mod session;

#[cfg(test)]
mod tests;

pub use bank::{
    FallbackReason, JsonFileQuestionSource, LoadedQuestions, QuestionBank, QuestionOrigin,
    QuestionSource, QuestionSourceError,
};
pub use domain::{AnswerOption, Career, Question};
pub use orchestrator::{run_assessment, AssessmentAborted, OptionChooser, ScriptedChooser};
pub use ranking::{
    build_tie_break_question, needs_tie_break, rank, resolve_tie_break, TieBreakRecord,
    TIE_BREAK_MARGIN, TIE_BREAK_PENALTY, TIE_BREAK_REWARD,
};
pub use registry::CareerRegistry;
pub use result::{display_name, AssessmentResult, RankedCareer, DEFAULT_USER_NAME};
pub use scoring::BadgeLedger;
pub use session::{AssessmentSession, AssessmentStage};
