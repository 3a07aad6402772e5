use super::domain::Career;
use super::ranking::TieBreakRecord;
use chrono::{DateTime, Local};
use serde::Serialize;

pub const DEFAULT_USER_NAME: &str = "Guest";

/// Trimmed display name, or [`DEFAULT_USER_NAME`] when missing or blank.
pub fn display_name(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_USER_NAME)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCareer {
    pub rank: usize,
    pub name: String,
    pub salary_range: String,
    pub description: String,
    pub score: i32,
}

impl RankedCareer {
    pub(crate) fn from_career(rank: usize, career: Career) -> Self {
        Self {
            rank,
            name: career.name,
            salary_range: career.salary_range,
            description: career.description,
            score: career.score,
        }
    }
}

/// Finished assessment handed to presentation and export.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub user_name: String,
    pub ranking: Vec<RankedCareer>,
    pub badges: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_break: Option<TieBreakRecord>,
    pub completed_at: DateTime<Local>,
}

impl AssessmentResult {
    pub fn top_recommendation(&self) -> Option<&RankedCareer> {
        self.ranking.first()
    }

    pub fn score_of(&self, career: &str) -> Option<i32> {
        self.ranking
            .iter()
            .find(|entry| entry.name == career)
            .map(|entry| entry.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_defaults_to_guest() {
        assert_eq!(display_name(None), "Guest");
        assert_eq!(display_name(Some("   ")), "Guest");
        assert_eq!(display_name(Some("  Grace ")), "Grace");
    }
}
