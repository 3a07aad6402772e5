use super::domain::{AnswerOption, Question};

const ENGINEER: &str = "Software Engineer";
const DATA: &str = "Data Scientist";
const DESIGN: &str = "UX Designer";
const PRODUCT: &str = "Product Manager";

pub(crate) fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "A free afternoon opens up. What do you reach for first?",
            vec![
                AnswerOption::new(
                    "Tinker with a side project until it compiles cleanly",
                    [(ENGINEER, 10), (DATA, 3)],
                )
                .with_badge("Builder"),
                AnswerOption::new(
                    "Dig through a public dataset looking for patterns",
                    [(DATA, 10), (ENGINEER, 2)],
                )
                .with_badge("Pattern Hunter"),
                AnswerOption::new(
                    "Sketch a redesign of an app that annoys you",
                    [(DESIGN, 10), (PRODUCT, 2)],
                )
                .with_badge("Creative Mind"),
                AnswerOption::new(
                    "Plan a community event and recruit helpers",
                    [(PRODUCT, 10), (DESIGN, 2)],
                )
                .with_badge("Organizer"),
            ],
        ),
        Question::new(
            "Your team ships a feature that users dislike. Your first move?",
            vec![
                AnswerOption::new(
                    "Profile the code path and fix the slow parts",
                    [(ENGINEER, 8), (DESIGN, -2)],
                ),
                AnswerOption::new(
                    "Pull the usage metrics and find where people drop off",
                    [(DATA, 8), (PRODUCT, 3)],
                )
                .with_badge("Pattern Hunter"),
                AnswerOption::new(
                    "Sit with five users and watch them struggle",
                    [(DESIGN, 8), (PRODUCT, 3)],
                )
                .with_badge("Empath"),
                AnswerOption::new(
                    "Reprioritize the roadmap and rally the team",
                    [(PRODUCT, 8), (ENGINEER, -2)],
                )
                .with_badge("Organizer"),
            ],
        ),
        Question::new(
            "Which school subject felt the most natural?",
            vec![
                AnswerOption::new("Computer science", [(ENGINEER, 6), (DATA, 2)]),
                AnswerOption::new("Statistics", [(DATA, 6), (ENGINEER, 1)]),
                AnswerOption::new("Art and visual design", [(DESIGN, 6)]),
                AnswerOption::new("Economics or business", [(PRODUCT, 6), (DATA, 1)]),
            ],
        ),
        Question::new(
            "How do you feel about long stretches of solo focus time?",
            vec![
                AnswerOption::new(
                    "I love them, that is where deep work happens",
                    [(ENGINEER, 5), (DATA, 5), (PRODUCT, -3)],
                )
                .with_badge("Deep Focus"),
                AnswerOption::new(
                    "Fine in moderation, but I need feedback loops",
                    [(DESIGN, 4), (DATA, 2)],
                ),
                AnswerOption::new(
                    "I get restless without people around",
                    [(PRODUCT, 5), (DESIGN, 2), (ENGINEER, -3)],
                )
                .with_badge("Team Player"),
            ],
        ),
        Question::new(
            "A stakeholder asks for something vague. You...",
            vec![
                AnswerOption::new(
                    "Prototype something quickly and iterate",
                    [(ENGINEER, 4), (DESIGN, 4)],
                )
                .with_badge("Builder"),
                AnswerOption::new(
                    "Ask which metric they want to move",
                    [(DATA, 5), (PRODUCT, 3)],
                ),
                AnswerOption::new(
                    "Run a workshop to uncover the real problem",
                    [(PRODUCT, 5), (DESIGN, 3)],
                )
                .with_badge("Team Player"),
            ],
        ),
        Question::new(
            "Which compliment would make your week?",
            vec![
                AnswerOption::new("\"Your code is so clean it reads like prose.\"", [(ENGINEER, 7)]),
                AnswerOption::new("\"Your analysis changed our strategy.\"", [(DATA, 7)]),
                AnswerOption::new("\"This is the easiest app I have ever used.\"", [(DESIGN, 7)])
                    .with_badge("Empath"),
                AnswerOption::new("\"We would not have shipped without you.\"", [(PRODUCT, 7)])
                    .with_badge("Organizer"),
            ],
        ),
        Question::new(
            "How comfortable are you with ambiguity and shifting priorities?",
            vec![
                AnswerOption::new(
                    "I prefer clear specs and well-defined problems",
                    [(ENGINEER, 4), (DATA, 3), (PRODUCT, -4)],
                ),
                AnswerOption::new(
                    "I am fine as long as I can test my assumptions",
                    [(DATA, 4), (DESIGN, 4)],
                ),
                AnswerOption::new(
                    "I thrive on it, someone has to make the call",
                    [(PRODUCT, 6), (ENGINEER, -2)],
                )
                .with_badge("Visionary"),
            ],
        ),
        Question::new(
            "Pick the tool you would most like to master this year.",
            vec![
                AnswerOption::new("A new systems programming language", [(ENGINEER, 6)])
                    .with_badge("Deep Focus"),
                AnswerOption::new("A machine learning framework", [(DATA, 6), (ENGINEER, 2)]),
                AnswerOption::new("A prototyping and design system tool", [(DESIGN, 6)])
                    .with_badge("Creative Mind"),
                AnswerOption::new("A roadmapping and analytics suite", [(PRODUCT, 6), (DATA, 2)])
                    .with_badge("Visionary"),
            ],
        ),
    ]
}
