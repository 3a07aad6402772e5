use crate::infra::AppContext;
use career_compass::assessment::{run_assessment, AssessmentSession, Question, ScriptedChooser};
use career_compass::error::AppError;
use career_compass::mailer::{ReportEmail, ReportMailer};
use career_compass::report::render_text_report;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Answers as 1-based option numbers, one per question and comma separated. Single-option
    /// questions still take a slot. An extra trailing number answers a sudden-death round.
    /// Missing answers pick option 1.
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub(crate) choices: Vec<usize>,
    /// Save the rendered report to the archive.
    #[arg(long)]
    pub(crate) save: bool,
    /// Send the report to this address through the simulated mailer.
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Print the result snapshot as JSON after the text report.
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(ctx: &AppContext, args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        choices,
        save,
        email,
        json,
    } = args;

    println!("Career assessment demo (scripted answers)");
    let loaded = ctx.load_questions();
    if let Some(notice) = &loaded.notice {
        println!("{notice}");
    }

    let picks = scripted_picks(&choices, &loaded.questions);
    let mut chooser = ScriptedChooser::new(picks);
    let mut session = AssessmentSession::standard();
    let result = run_assessment(
        &mut session,
        &loaded.questions,
        &mut chooser,
        ctx.user_name.as_deref(),
    )?;

    println!();
    for (position, question) in chooser.asked().iter().enumerate() {
        println!("- Q{}: {}", position + 1, question);
    }
    println!();
    print!("{}", render_text_report(&result));

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(payload) => println!("Result snapshot:\n{}", payload),
            Err(err) => println!("Result snapshot unavailable: {}", err),
        }
    }

    if save {
        let path = ctx.archive.save(&result)?;
        println!("Report saved to {}", path.display());
    }

    if let Some(recipient) = email {
        let receipt = ctx.mailer.send(&ReportEmail {
            recipient,
            subject: format!("Career assessment report for {}", result.user_name),
            body: render_text_report(&result),
        })?;
        println!(
            "Report sent to {} (simulated, message {})",
            receipt.recipient, receipt.message_id
        );
    }

    Ok(())
}

/// Zero-based picks for the chooser. The orchestrator answers questions with fewer than two
/// options itself, so their slots are dropped here to keep later answers aligned. The pick
/// after the last question feeds a possible sudden-death round.
fn scripted_picks(choices: &[usize], questions: &[Question]) -> Vec<usize> {
    let pick_at = |slot: usize| {
        choices
            .get(slot)
            .map_or(0, |choice| choice.saturating_sub(1))
    };

    let mut picks: Vec<usize> = questions
        .iter()
        .enumerate()
        .filter(|(_, question)| question.options.len() > 1)
        .map(|(slot, _)| pick_at(slot))
        .collect();
    picks.push(pick_at(questions.len()));
    picks
}
