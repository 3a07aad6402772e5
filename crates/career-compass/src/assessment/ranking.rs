use super::domain::{AnswerOption, Career, Question};
use super::orchestrator::{AssessmentAborted, OptionChooser};
use super::registry::CareerRegistry;
use super::session::AssessmentSession;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The leader must be at least this many points ahead to skip sudden death.
pub const TIE_BREAK_MARGIN: i32 = 5;
/// Points granted to the career the user focuses on in sudden death.
pub const TIE_BREAK_REWARD: i32 = 10;
/// Points taken from the other finalist in sudden death.
pub const TIE_BREAK_PENALTY: i32 = 5;

/// Outcome of a sudden-death round, kept on the result snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakRecord {
    pub leader: String,
    pub challenger: String,
    pub chosen: String,
}

/// Careers by score descending. Equal scores keep registry insertion order.
pub fn rank(registry: &CareerRegistry) -> Vec<Career> {
    let mut ranked = registry.all().to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// True when the top two finish within [`TIE_BREAK_MARGIN`] of each other.
pub fn needs_tie_break(ranked: &[Career]) -> bool {
    match ranked {
        [first, second, ..] => {
            i64::from(first.score) - i64::from(second.score) < i64::from(TIE_BREAK_MARGIN)
        }
        _ => false,
    }
}

pub fn build_tie_break_question(leader: &str, challenger: &str) -> Question {
    Question::new(
        format!(
            "Sudden death! {leader} and {challenger} are neck and neck. \
             Which path would you rather commit to?"
        ),
        vec![
            AnswerOption::new(
                format!("Focus on {leader}"),
                [
                    (leader.to_string(), TIE_BREAK_REWARD),
                    (challenger.to_string(), -TIE_BREAK_PENALTY),
                ],
            ),
            AnswerOption::new(
                format!("Focus on {challenger}"),
                [
                    (challenger.to_string(), TIE_BREAK_REWARD),
                    (leader.to_string(), -TIE_BREAK_PENALTY),
                ],
            ),
        ],
    )
}

/// Ask the sudden-death question and apply the chosen option. Does not re-rank.
///
/// Returns `Ok(None)` without consulting the chooser when this session already ran
/// its tie-break.
pub fn resolve_tie_break<C>(
    session: &mut AssessmentSession,
    leader: &str,
    challenger: &str,
    chooser: &mut C,
) -> Result<Option<TieBreakRecord>, AssessmentAborted>
where
    C: OptionChooser + ?Sized,
{
    if !session.tie_break_available() {
        warn!(leader, challenger, "tie-break already resolved for this assessment");
        return Ok(None);
    }

    session.enter_tie_break();
    let question = build_tie_break_question(leader, challenger);
    let chosen = chooser.choose(&question)?;
    session.apply_score(&chosen);

    let record = TieBreakRecord {
        leader: leader.to_string(),
        challenger: challenger.to_string(),
        chosen: chosen.text,
    };
    info!(leader, challenger, chosen = %record.chosen, "tie-break resolved");
    session.complete_tie_break(record.clone());

    Ok(Some(record))
}
