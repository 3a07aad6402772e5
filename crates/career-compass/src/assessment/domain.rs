use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recommendation target with a mutable point total for the current assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub name: String,
    pub description: String,
    pub salary_range: String,
    #[serde(default)]
    pub score: i32,
}

impl Career {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        salary_range: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            salary_range: salary_range.into(),
            score: 0,
        }
    }

    /// Scores may go negative. Only the i32 bounds stop the total.
    pub(crate) fn adjust(&mut self, delta: i32) {
        self.score = self.score.saturating_add(delta);
    }
}

/// One prompt in an assessment together with its ordered answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// A selectable answer. `impact` keys that name no registered career are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    #[serde(default)]
    pub impact: BTreeMap<String, i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_awarded: Option<String>,
}

impl AnswerOption {
    pub fn new<I, K>(text: impl Into<String>, impact: I) -> Self
    where
        I: IntoIterator<Item = (K, i32)>,
        K: Into<String>,
    {
        Self {
            text: text.into(),
            impact: impact
                .into_iter()
                .map(|(career, delta)| (career.into(), delta))
                .collect(),
            badge_awarded: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge_awarded = Some(badge.into());
        self
    }

    /// Badge name if present and non-blank.
    pub fn badge(&self) -> Option<&str> {
        self.badge_awarded
            .as_deref()
            .map(str::trim)
            .filter(|badge| !badge.is_empty())
    }
}
