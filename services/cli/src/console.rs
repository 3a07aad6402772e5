use career_compass::assessment::{AnswerOption, AssessmentAborted, OptionChooser, Question};
use std::io::{self, BufRead, Write};

/// Parsed answer to a numbered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    Pick(usize),
    Quit,
    Invalid,
}

/// Map user input like `2` or `q` onto a zero-based index within `count` options.
pub(crate) fn parse_selection(input: &str, count: usize) -> Selection {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Selection::Quit;
    }
    match trimmed.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Selection::Pick(number - 1),
        _ => Selection::Invalid,
    }
}

/// Line-oriented terminal presenter. Generic over its streams so flows can be
/// driven from scripted input.
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
    asked: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            asked: 0,
        }
    }

    pub(crate) fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Prompt and read one trimmed line. `None` means the input stream closed.
    pub(crate) fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Yes/no prompt; anything but `y`/`yes` is a no.
    pub(crate) fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .map(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    pub(crate) fn reset_progress(&mut self) {
        self.asked = 0;
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    fn present(&mut self, question: &Question) -> io::Result<()> {
        self.asked += 1;
        writeln!(self.output)?;
        writeln!(self.output, "Question {}: {}", self.asked, question.text)?;
        for (position, option) in question.options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", position + 1, option.text)?;
        }
        Ok(())
    }

    fn select(&mut self, question: &Question) -> Result<AnswerOption, AssessmentAborted> {
        self.present(question)
            .map_err(|_| AssessmentAborted::InputClosed)?;

        let count = question.options.len();
        if let [only] = question.options.as_slice() {
            self.say("  (only one answer available, selected automatically)")
                .map_err(|_| AssessmentAborted::InputClosed)?;
            return Ok(only.clone());
        }

        loop {
            let prompt = format!("Choose 1-{count} (q to quit): ");
            let line = self
                .ask(&prompt)
                .map_err(|_| AssessmentAborted::InputClosed)?
                .ok_or(AssessmentAborted::InputClosed)?;

            match parse_selection(&line, count) {
                Selection::Pick(index) => {
                    return question
                        .options
                        .get(index)
                        .cloned()
                        .ok_or(AssessmentAborted::NoSuchOption {
                            index,
                            available: count,
                        })
                }
                Selection::Quit => return Err(AssessmentAborted::Cancelled),
                Selection::Invalid => self
                    .say(format!("Please enter a number between 1 and {count}."))
                    .map_err(|_| AssessmentAborted::InputClosed)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> OptionChooser for Console<R, W> {
    fn choose(&mut self, question: &Question) -> Result<AnswerOption, AssessmentAborted> {
        if question.options.is_empty() {
            return Err(AssessmentAborted::NoSuchOption {
                index: 0,
                available: 0,
            });
        }
        self.select(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn question() -> Question {
        Question::new(
            "Favourite tool?",
            vec![
                AnswerOption::new("Compiler", [("Software Engineer", 5)]),
                AnswerOption::new("Notebook", [("Data Scientist", 5)]),
                AnswerOption::new("Sketchpad", [("UX Designer", 5)]),
            ],
        )
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn parse_selection_maps_one_based_numbers() {
        assert_eq!(parse_selection(" 2 ", 3), Selection::Pick(1));
        assert_eq!(parse_selection("Q", 3), Selection::Quit);
        assert_eq!(parse_selection("0", 3), Selection::Invalid);
        assert_eq!(parse_selection("4", 3), Selection::Invalid);
        assert_eq!(parse_selection("two", 3), Selection::Invalid);
    }

    #[test]
    fn chooser_reprompts_until_valid() {
        let mut console = console("abc\n9\n3\n");

        let chosen = console.choose(&question()).expect("valid pick");

        assert_eq!(chosen.text, "Sketchpad");
        let output = String::from_utf8(console.into_output()).expect("utf8");
        assert!(output.contains("Question 1: Favourite tool?"));
        assert!(output.contains("  2) Notebook"));
        assert_eq!(output.matches("Please enter a number between 1 and 3.").count(), 2);
    }

    #[test]
    fn quit_and_eof_abort() {
        assert_eq!(
            console("q\n").choose(&question()),
            Err(AssessmentAborted::Cancelled)
        );
        assert_eq!(
            console("").choose(&question()),
            Err(AssessmentAborted::InputClosed)
        );
    }

    #[test]
    fn single_option_needs_no_input() {
        let mut console = console("");
        let only = Question::new("Continue?", vec![AnswerOption::new("Yes", [("X", 1)])]);

        let chosen = console.choose(&only).expect("auto-selected");

        assert_eq!(chosen.text, "Yes");
    }

    #[test]
    fn confirm_accepts_yes_variants_only() {
        assert!(console("Y\n").confirm("? ").expect("io"));
        assert!(console("yes\n").confirm("? ").expect("io"));
        assert!(!console("nope\n").confirm("? ").expect("io"));
        assert!(!console("").confirm("? ").expect("io"));
    }
}
