use crate::console::Console;
use crate::demo::{run_demo, DemoArgs};
use crate::infra::{verify_admin, AppContext};
use crate::menu::{run_menu, run_quiz, QuizOptions};
use career_compass::assessment::{AssessmentSession, QuestionBank, QuestionSource};
use career_compass::config::AppConfig;
use career_compass::error::AppError;
use career_compass::telemetry;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Take the career assessment and manage saved reports from the command line",
    version
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct GlobalArgs {
    /// Override the question source document path
    #[arg(long, global = true)]
    questions: Option<PathBuf>,
    /// Override the directory saved reports are written to
    #[arg(long, global = true)]
    reports_dir: Option<PathBuf>,
    /// Display name used on reports (defaults to "Guest")
    #[arg(long, global = true)]
    name: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (default command)
    Menu,
    /// Take the assessment once
    Quiz(QuizArgs),
    /// Run the assessment with scripted answers
    Demo(DemoArgs),
    /// Browse saved reports (requires the admin password)
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },
    /// Manage the question source document
    Questions {
        #[command(subcommand)]
        command: QuestionsCommand,
    },
}

#[derive(Args, Debug)]
struct QuizArgs {
    /// Save the report without asking
    #[arg(long)]
    save: bool,
    /// E-mail the report to this address (simulated) without asking
    #[arg(long)]
    email: Option<String>,
}

#[derive(Args, Debug)]
struct AdminArgs {
    /// Admin password
    #[arg(long)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List saved report files
    List(AdminArgs),
    /// Print one saved report
    Show {
        /// File name as shown by `history list`
        file: String,
        #[command(flatten)]
        admin: AdminArgs,
    },
}

#[derive(Subcommand, Debug)]
enum QuestionsCommand {
    /// Write the built-in question set to the question source for customization
    ExportDefaults {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let GlobalArgs {
        questions,
        reports_dir,
        name,
    } = cli.global;
    let mut ctx = AppContext::from_config(&config, questions, reports_dir, name);
    info!(?config.environment, questions = %ctx.questions.path().display(), "career compass starting");

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            run_menu(&mut ctx, &mut console)
        }
        Command::Quiz(args) => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            let options = QuizOptions {
                save: args.save,
                email: args.email,
                prompt_follow_up: false,
            };
            run_quiz(&ctx, &mut console, &mut AssessmentSession::standard(), &options)?;
            Ok(())
        }
        Command::Demo(args) => run_demo(&ctx, args),
        Command::History { command } => run_history(&ctx, command),
        Command::Questions {
            command: QuestionsCommand::ExportDefaults { force },
        } => export_defaults(&ctx, force),
    }
}

fn run_history(ctx: &AppContext, command: HistoryCommand) -> Result<(), AppError> {
    match command {
        HistoryCommand::List(admin) => {
            verify_admin(&admin.password)?;
            let reports = ctx.archive.list()?;
            if reports.is_empty() {
                println!("No saved reports in {}", ctx.archive.dir().display());
            }
            for report in reports {
                println!("{}", report.file_name);
            }
            Ok(())
        }
        HistoryCommand::Show { file, admin } => {
            verify_admin(&admin.password)?;
            print!("{}", ctx.archive.read(&file)?);
            Ok(())
        }
    }
}

fn export_defaults(ctx: &AppContext, force: bool) -> Result<(), AppError> {
    let path = ctx.questions.path();
    if path.exists() && !force {
        println!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
        return Ok(());
    }

    let defaults = QuestionBank::defaults();
    ctx.questions.save(&defaults)?;
    println!("Wrote {} questions to {}", defaults.len(), path.display());
    Ok(())
}
