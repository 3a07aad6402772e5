use super::common::*;
use crate::assessment::domain::AnswerOption;

#[test]
fn impacts_add_signed_deltas_to_named_careers() {
    let mut session = session();

    session.apply_score(&AnswerOption::new("a", [(ENGINEER, 10), (DESIGN, -4)]));
    session.apply_score(&AnswerOption::new("b", [(ENGINEER, -3), (DATA, 6)]));

    assert_eq!(session.score_of(ENGINEER), Some(7));
    assert_eq!(session.score_of(DATA), Some(6));
    assert_eq!(session.score_of(DESIGN), Some(-4));
    assert_eq!(session.score_of(PRODUCT), Some(0));
}

#[test]
fn final_scores_do_not_depend_on_answer_order() {
    let options = [
        AnswerOption::new("a", [(ENGINEER, 5), (PRODUCT, -2)]),
        AnswerOption::new("b", [(PRODUCT, 7)]),
        AnswerOption::new("c", [(ENGINEER, -1), (DATA, 3)]),
    ];

    let mut forward = session();
    options.iter().for_each(|option| forward.apply_score(option));
    let mut backward = session();
    options
        .iter()
        .rev()
        .for_each(|option| backward.apply_score(option));

    for career in [ENGINEER, DATA, DESIGN, PRODUCT] {
        assert_eq!(forward.score_of(career), backward.score_of(career));
    }
    assert_eq!(forward.score_of(ENGINEER), Some(4));
    assert_eq!(forward.score_of(PRODUCT), Some(5));
}

#[test]
fn replaying_an_option_counts_it_twice() {
    let mut session = session();
    let option = AnswerOption::new("again", [(DATA, 4)]).with_badge("Echo");

    session.apply_score(&option);
    session.apply_score(&option);

    assert_eq!(session.score_of(DATA), Some(8));
    assert_eq!(session.badges().as_slice(), ["Echo".to_string()]);
}

#[test]
fn unknown_career_names_are_ignored() {
    let mut session = session();

    session.apply_score(&AnswerOption::new("ghost", [("Nonexistent Career", 10)]));

    assert_eq!(session.registry().len(), 4);
    assert!(session
        .registry()
        .all()
        .iter()
        .all(|career| career.score == 0));
    assert!(session.registry().lookup("Nonexistent Career").is_none());
}

#[test]
fn badges_are_unique_and_keep_first_seen_order() {
    let mut session = session();
    let awards = ["Builder", "Empath", "Builder", "Visionary", "Empath", "Builder"];

    for badge in awards {
        session.apply_score(&AnswerOption::new(badge, [(ENGINEER, 1)]).with_badge(badge));
    }

    assert_eq!(
        session.badges().as_slice(),
        [
            "Builder".to_string(),
            "Empath".to_string(),
            "Visionary".to_string()
        ]
    );
}

#[test]
fn blank_badges_are_not_recorded() {
    let mut session = session();

    session.apply_score(&AnswerOption::new("blank", [(DATA, 1)]).with_badge(""));
    session.apply_score(&AnswerOption::new("none", [(DATA, 1)]));

    assert!(session.badges().is_empty());
}

#[test]
fn scores_may_go_negative_without_clamping() {
    let mut session = session();

    session.apply_score(&AnswerOption::new("down", [(PRODUCT, -25)]));

    assert_eq!(session.score_of(PRODUCT), Some(-25));
}

#[test]
fn begin_resets_scores_and_badges_between_runs() {
    let mut session = session();
    session.apply_score(&AnswerOption::new("x", [(DESIGN, 9)]).with_badge("Creative Mind"));

    session.begin(3);

    assert_eq!(session.score_of(DESIGN), Some(0));
    assert!(session.badges().is_empty());
    assert!(session.tie_break_available());
}
