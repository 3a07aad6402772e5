//! Plain-text rendering of a finished assessment.

use crate::assessment::AssessmentResult;
use std::fmt::Write;

const RULE: &str = "==================================================";

pub fn render_text_report(result: &AssessmentResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, result: &AssessmentResult) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "CAREER ASSESSMENT REPORT")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Name: {}", result.user_name)?;
    writeln!(
        out,
        "Date: {}",
        result.completed_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;

    match result.top_recommendation() {
        Some(top) => {
            writeln!(out, "Top recommendation: {}", top.name)?;
            writeln!(out, "Salary range: {}", top.salary_range)?;
            if !top.description.is_empty() {
                writeln!(out, "{}", top.description)?;
            }
        }
        None => writeln!(out, "Top recommendation: none")?,
    }

    if let Some(tie_break) = &result.tie_break {
        writeln!(out)?;
        writeln!(
            out,
            "Sudden death between {} and {}: {}",
            tie_break.leader, tie_break.challenger, tie_break.chosen
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Full breakdown")?;
    for entry in &result.ranking {
        writeln!(out, "{}. {}: {} points", entry.rank, entry.name, entry.score)?;
    }

    writeln!(out)?;
    writeln!(out, "Badges earned")?;
    if result.badges.is_empty() {
        writeln!(out, "- None yet")?;
    } else {
        for badge in &result.badges {
            writeln!(out, "- {badge}")?;
        }
    }
    writeln!(out, "{RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{AnswerOption, AssessmentSession, TieBreakRecord};

    fn finished(user: Option<&str>) -> AssessmentResult {
        let mut session = AssessmentSession::standard();
        session.begin(1);
        session.record_answer(
            &AnswerOption::new("x", [("Data Scientist", 12), ("UX Designer", 3)])
                .with_badge("Pattern Hunter"),
        );
        session.rank();
        session.finalize(user)
    }

    #[test]
    fn report_lists_top_pick_breakdown_and_badges() {
        let report = render_text_report(&finished(Some("Ada")));

        assert!(report.contains("CAREER ASSESSMENT REPORT"));
        assert!(report.contains("Name: Ada"));
        assert!(report.contains("Top recommendation: Data Scientist"));
        assert!(report.contains("Salary range: $95,000 - $165,000"));
        assert!(report.contains("1. Data Scientist: 12 points"));
        assert!(report.contains("2. UX Designer: 3 points"));
        assert!(report.contains("4. Product Manager: 0 points"));
        assert!(report.contains("- Pattern Hunter"));
        assert!(!report.contains("Sudden death"));
    }

    #[test]
    fn report_mentions_tie_break_and_empty_badges() {
        let mut result = finished(None);
        result.badges.clear();
        result.tie_break = Some(TieBreakRecord {
            leader: "Data Scientist".to_string(),
            challenger: "UX Designer".to_string(),
            chosen: "Focus on UX Designer".to_string(),
        });

        let report = render_text_report(&result);

        assert!(report.contains("Name: Guest"));
        assert!(report.contains("Sudden death between Data Scientist and UX Designer"));
        assert!(report.contains("- None yet"));
    }
}
