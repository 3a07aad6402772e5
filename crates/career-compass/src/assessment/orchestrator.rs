use super::domain::{AnswerOption, Question};
use super::ranking::{needs_tie_break, resolve_tie_break};
use super::result::AssessmentResult;
use super::session::AssessmentSession;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// Why an assessment stopped before producing a result. The session is left
/// mid-run and must be restarted with [`AssessmentSession::begin`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentAborted {
    #[error("input closed before the assessment finished")]
    InputClosed,
    #[error("assessment cancelled by the user")]
    Cancelled,
    #[error("option {index} does not exist (question has {available})")]
    NoSuchOption { index: usize, available: usize },
}

/// Presentation boundary: given a question, produce the option the user picked.
pub trait OptionChooser {
    fn choose(&mut self, question: &Question) -> Result<AnswerOption, AssessmentAborted>;
}

impl<F> OptionChooser for F
where
    F: FnMut(&Question) -> Result<AnswerOption, AssessmentAborted>,
{
    fn choose(&mut self, question: &Question) -> Result<AnswerOption, AssessmentAborted> {
        self(question)
    }
}

/// Answers questions from a fixed list of zero-based option indexes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChooser {
    picks: VecDeque<usize>,
    asked: Vec<String>,
}

impl ScriptedChooser {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Text of every question this chooser was consulted for, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl OptionChooser for ScriptedChooser {
    fn choose(&mut self, question: &Question) -> Result<AnswerOption, AssessmentAborted> {
        self.asked.push(question.text.clone());
        let index = self
            .picks
            .pop_front()
            .ok_or(AssessmentAborted::InputClosed)?;
        question
            .options
            .get(index)
            .cloned()
            .ok_or(AssessmentAborted::NoSuchOption {
                index,
                available: question.options.len(),
            })
    }
}

/// Drive one assessment end to end and return its result snapshot.
///
/// Questions without options are skipped. A single-option question is answered
/// without consulting the chooser.
pub fn run_assessment<C>(
    session: &mut AssessmentSession,
    questions: &[Question],
    chooser: &mut C,
    user_name: Option<&str>,
) -> Result<AssessmentResult, AssessmentAborted>
where
    C: OptionChooser + ?Sized,
{
    session.begin(questions.len());

    for (position, question) in questions.iter().enumerate() {
        let chosen = match question.options.as_slice() {
            [] => {
                warn!(question = position + 1, "question has no options; skipped");
                continue;
            }
            [only] => only.clone(),
            _ => chooser.choose(question)?,
        };
        debug!(question = position + 1, option = %chosen.text, "answer recorded");
        session.record_answer(&chosen);
    }

    let ranked = session.rank();
    if needs_tie_break(&ranked) {
        if let [leader, challenger, ..] = ranked.as_slice() {
            info!(
                leader = %leader.name,
                challenger = %challenger.name,
                gap = leader.score.saturating_sub(challenger.score),
                "close race detected"
            );
            resolve_tie_break(session, &leader.name, &challenger.name, chooser)?;
            session.rank();
        }
    }

    let result = session.finalize(user_name);
    info!(
        user = %result.user_name,
        top = result.top_recommendation().map(|c| c.name.as_str()).unwrap_or("none"),
        badges = result.badges.len(),
        "assessment finalized"
    );
    Ok(result)
}
