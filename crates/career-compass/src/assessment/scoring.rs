use super::domain::AnswerOption;
use super::registry::CareerRegistry;
use serde::Serialize;
use tracing::debug;

/// Badges earned during one assessment, de-duplicated and kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BadgeLedger {
    earned: Vec<String>,
}

impl BadgeLedger {
    /// Returns `true` when the badge was newly recorded.
    pub fn record(&mut self, badge: &str) -> bool {
        if self.contains(badge) {
            return false;
        }
        self.earned.push(badge.to_string());
        true
    }

    pub fn contains(&self, badge: &str) -> bool {
        self.earned.iter().any(|earned| earned == badge)
    }

    pub fn clear(&mut self) {
        self.earned.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.earned
    }

    pub fn len(&self) -> usize {
        self.earned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earned.is_empty()
    }
}

/// Apply one answer event. Replaying the same option counts it twice.
pub(crate) fn apply_score(
    registry: &mut CareerRegistry,
    badges: &mut BadgeLedger,
    option: &AnswerOption,
) {
    for (career_name, delta) in &option.impact {
        match registry.lookup_mut(career_name) {
            Some(career) => {
                career.adjust(*delta);
                debug!(career = %career_name, delta, score = career.score, "applied impact");
            }
            None => debug!(career = %career_name, "impact names unknown career; skipped"),
        }
    }

    if let Some(badge) = option.badge() {
        if badges.record(badge) {
            debug!(badge, "badge earned");
        }
    }
}
