use crate::console::{parse_selection, Console, Selection};
use crate::infra::{verify_admin, AppContext};
use career_compass::assessment::{
    display_name, run_assessment, AssessmentResult, AssessmentSession,
};
use career_compass::error::AppError;
use career_compass::mailer::{MailError, ReportEmail, ReportMailer};
use career_compass::report::render_text_report;
use std::io::{BufRead, Write};
use tracing::info;

/// Follow-up behavior after an assessment finishes.
#[derive(Debug, Clone, Default)]
pub(crate) struct QuizOptions {
    pub(crate) save: bool,
    pub(crate) email: Option<String>,
    /// Ask the user about saving and e-mailing instead of relying on flags only.
    pub(crate) prompt_follow_up: bool,
}

impl QuizOptions {
    pub(crate) fn interactive() -> Self {
        Self {
            prompt_follow_up: true,
            ..Self::default()
        }
    }
}

/// One full assessment at the console. Returns `None` when the user aborted.
pub(crate) fn run_quiz<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    session: &mut AssessmentSession,
    options: &QuizOptions,
) -> Result<Option<AssessmentResult>, AppError> {
    let loaded = ctx.load_questions();
    if let Some(notice) = &loaded.notice {
        console.say(notice)?;
    }

    console.reset_progress();
    console.say(format!(
        "\nWelcome, {}! {} questions ahead. Answer honestly, there are no wrong choices.",
        display_name(ctx.user_name.as_deref()),
        loaded.questions.len()
    ))?;

    let result = match run_assessment(
        session,
        &loaded.questions,
        console,
        ctx.user_name.as_deref(),
    ) {
        Ok(result) => result,
        Err(err) => {
            console.say(format!("\nAssessment stopped: {err}. Nothing was saved."))?;
            return Ok(None);
        }
    };

    console.say("")?;
    console.say(render_text_report(&result))?;

    let save = options.save
        || (options.prompt_follow_up && console.confirm("Save this report? [y/N] ")?);
    if save {
        let path = ctx.archive.save(&result)?;
        console.say(format!("Report saved to {}", path.display()))?;
    }

    let recipient = match &options.email {
        Some(address) => Some(address.clone()),
        None if options.prompt_follow_up => console
            .ask("E-mail the report to (leave blank to skip): ")?
            .filter(|address| !address.is_empty()),
        None => None,
    };
    if let Some(recipient) = recipient {
        email_report(ctx, console, &result, recipient)?;
    }

    Ok(Some(result))
}

fn email_report<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
    result: &AssessmentResult,
    recipient: String,
) -> Result<(), AppError> {
    let email = ReportEmail {
        recipient,
        subject: format!("Career assessment report for {}", result.user_name),
        body: render_text_report(result),
    };

    match ctx.mailer.send(&email) {
        Ok(receipt) => console.say(format!(
            "Report sent to {} (simulated, message {})",
            receipt.recipient, receipt.message_id
        ))?,
        Err(MailError::InvalidRecipient(address)) => {
            console.say(format!("'{address}' does not look like an e-mail address; skipped."))?
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

pub(crate) fn run_menu<R: BufRead, W: Write>(
    ctx: &mut AppContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let mut session = AssessmentSession::standard();

    loop {
        console.say("")?;
        console.say("=== Career Compass ===")?;
        console.say("  1) Take the assessment")?;
        console.say(format!(
            "  2) Set display name (current: {})",
            display_name(ctx.user_name.as_deref())
        ))?;
        console.say("  3) View saved reports (admin)")?;
        console.say("  4) Exit")?;

        let Some(choice) = console.ask("Select an option: ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                run_quiz(ctx, console, &mut session, &QuizOptions::interactive())?;
            }
            "2" => {
                if let Some(name) = console.ask("Display name: ")? {
                    let name = name.trim().to_string();
                    ctx.user_name = (!name.is_empty()).then_some(name);
                    info!(user = %display_name(ctx.user_name.as_deref()), "display name updated");
                }
            }
            "3" => browse_history(ctx, console)?,
            "4" | "q" | "Q" => {
                console.say("Goodbye!")?;
                return Ok(());
            }
            other => console.say(format!("Unknown option '{other}'."))?,
        }
    }
}

fn browse_history<R: BufRead, W: Write>(
    ctx: &AppContext,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Some(password) = console.ask("Admin password: ")? else {
        return Ok(());
    };
    if verify_admin(&password).is_err() {
        console.say("Incorrect password.")?;
        return Ok(());
    }

    let reports = ctx.archive.list()?;
    if reports.is_empty() {
        console.say("No saved reports yet.")?;
        return Ok(());
    }

    for (position, report) in reports.iter().enumerate() {
        console.say(format!("  {}) {}", position + 1, report.file_name))?;
    }

    let Some(pick) = console.ask("Open which report? (blank to go back): ")? else {
        return Ok(());
    };
    if pick.is_empty() {
        return Ok(());
    }

    match parse_selection(&pick, reports.len()) {
        Selection::Pick(index) => {
            if let Some(report) = reports.get(index) {
                let contents = ctx.archive.read(&report.file_name)?;
                console.say(contents)?;
            }
        }
        Selection::Quit => {}
        Selection::Invalid => console.say("No such report.")?,
    }
    Ok(())
}
