use super::domain::{AnswerOption, Career};
use super::ranking::{self, TieBreakRecord};
use super::registry::CareerRegistry;
use super::result::{display_name, AssessmentResult, RankedCareer};
use super::scoring::{apply_score, BadgeLedger};
use chrono::Local;
use serde::Serialize;
use tracing::info;

/// Where a session sits in `Idle -> AskingQuestions -> Ranked -> [TieBreak -> Ranked] -> Finalized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "stage")]
pub enum AssessmentStage {
    Idle,
    AskingQuestions { answered: usize, total: usize },
    Ranked,
    TieBreak,
    Finalized,
}

impl AssessmentStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AskingQuestions { .. } => "Asking Questions",
            Self::Ranked => "Ranked",
            Self::TieBreak => "Tie-Break",
            Self::Finalized => "Finalized",
        }
    }
}

/// Mutable state for one assessment: career scores, earned badges, and progress.
///
/// A session can be reused for repeated runs; [`AssessmentSession::begin`] resets it.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    registry: CareerRegistry,
    badges: BadgeLedger,
    stage: AssessmentStage,
    tie_break: Option<TieBreakRecord>,
    tie_break_used: bool,
}

impl AssessmentSession {
    pub fn new(registry: CareerRegistry) -> Self {
        Self {
            registry,
            badges: BadgeLedger::default(),
            stage: AssessmentStage::Idle,
            tie_break: None,
            tie_break_used: false,
        }
    }

    pub fn standard() -> Self {
        Self::new(CareerRegistry::standard())
    }

    /// Zero scores, clear badges and tie-break state, and return to `Idle`.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.badges.clear();
        self.stage = AssessmentStage::Idle;
        self.tie_break = None;
        self.tie_break_used = false;
    }

    pub fn begin(&mut self, total: usize) {
        self.reset();
        self.stage = AssessmentStage::AskingQuestions { answered: 0, total };
        info!(
            questions = total,
            careers = self.registry.len(),
            "assessment started"
        );
    }

    /// Scoring engine entry point: apply one option's impact map and badge.
    pub fn apply_score(&mut self, option: &AnswerOption) {
        apply_score(&mut self.registry, &mut self.badges, option);
    }

    /// Apply a main-loop answer and advance the question counter.
    pub fn record_answer(&mut self, option: &AnswerOption) {
        self.apply_score(option);
        if let AssessmentStage::AskingQuestions { answered, total } = self.stage {
            self.stage = AssessmentStage::AskingQuestions {
                answered: answered.saturating_add(1),
                total,
            };
        }
    }

    pub fn rank(&mut self) -> Vec<Career> {
        self.stage = AssessmentStage::Ranked;
        ranking::rank(&self.registry)
    }

    pub fn tie_break_available(&self) -> bool {
        !self.tie_break_used
    }

    pub(crate) fn enter_tie_break(&mut self) {
        self.tie_break_used = true;
        self.stage = AssessmentStage::TieBreak;
    }

    pub(crate) fn complete_tie_break(&mut self, record: TieBreakRecord) {
        self.tie_break = Some(record);
    }

    /// Freeze the current ranking and badges into an immutable result snapshot.
    pub fn finalize(&mut self, user_name: Option<&str>) -> AssessmentResult {
        let ranking = ranking::rank(&self.registry)
            .into_iter()
            .enumerate()
            .map(|(position, career)| RankedCareer::from_career(position + 1, career))
            .collect();

        self.stage = AssessmentStage::Finalized;

        AssessmentResult {
            user_name: display_name(user_name),
            ranking,
            badges: self.badges.as_slice().to_vec(),
            tie_break: self.tie_break.clone(),
            completed_at: Local::now(),
        }
    }

    pub fn registry(&self) -> &CareerRegistry {
        &self.registry
    }

    pub fn badges(&self) -> &BadgeLedger {
        &self.badges
    }

    pub fn stage(&self) -> AssessmentStage {
        self.stage
    }

    pub fn tie_break(&self) -> Option<&TieBreakRecord> {
        self.tie_break.as_ref()
    }

    pub fn score_of(&self, career: &str) -> Option<i32> {
        self.registry.lookup(career).map(|career| career.score)
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::standard()
    }
}
