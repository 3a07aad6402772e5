use career_compass::assessment::{AnswerOption, AssessmentSession};
use career_compass::history::{ArchiveError, ReportArchive};
use career_compass::mailer::{ReportEmail, ReportMailer, SimulatedMailer};
use career_compass::report::render_text_report;

fn finished_result(name: &str) -> career_compass::assessment::AssessmentResult {
    let mut session = AssessmentSession::standard();
    session.begin(1);
    session.record_answer(&AnswerOption::new("pick", [("UX Designer", 20)]).with_badge("Empath"));
    session.rank();
    session.finalize(Some(name))
}

#[test]
fn saved_reports_are_listed_and_readable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let archive = ReportArchive::new(dir.path().join("reports"));
    let result = finished_result("Grace Hopper");

    let path = archive.save(&result).expect("report saved");

    let listed = archive.list().expect("list reports");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].path, path);
    assert!(listed[0].file_name.starts_with("career_report_grace_hopper_"));
    assert!(listed[0].file_name.ends_with(".txt"));

    let contents = archive.read(&listed[0].file_name).expect("read report");
    assert_eq!(contents, render_text_report(&result));
    assert!(contents.contains("1. UX Designer: 20 points"));
}

#[test]
fn missing_archive_directory_lists_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let archive = ReportArchive::new(dir.path().join("never-created"));

    assert!(archive.list().expect("empty listing").is_empty());
    assert!(matches!(
        archive.read("career_report_guest_20250101_000000.txt"),
        Err(ArchiveError::NotFound(_))
    ));
}

#[test]
fn listing_skips_non_report_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("notes.md"), "scratch").expect("write");
    let archive = ReportArchive::new(dir.path());
    archive.save(&finished_result("Ada")).expect("saved");

    let listed = archive.list().expect("list");

    assert_eq!(listed.len(), 1);
    assert!(listed[0].file_name.contains("ada"));
}

#[test]
fn rendered_report_can_be_mailed_through_simulation() {
    let mailer = SimulatedMailer::default();
    let result = finished_result("Ada");

    let receipt = mailer
        .send(&ReportEmail {
            recipient: "ada@example.com".to_string(),
            subject: format!("Career report for {}", result.user_name),
            body: render_text_report(&result),
        })
        .expect("simulated delivery");

    assert_eq!(receipt.recipient, "ada@example.com");
    let outbox = mailer.outbox();
    assert_eq!(outbox.len(), 1);
    assert!(outbox[0].body.contains("Top recommendation: UX Designer"));
}
