//! Answer intake - the boundary that turns user input into a `UserAnswers` record.

use std::io::{BufRead, Write};

use game_catalog::{Answer, Question, UserAnswers};
use tracing::debug;

use crate::config::Vocabulary;
use crate::error::IntakeError;

/// Message shown when an answer is not recognised.
pub const REPROMPT_MESSAGE: &str = "Please answer 'yes' or 'no'.";

/// Source of questionnaire answers.
pub trait AnswerIntake {
    /// Ask one question until a valid answer is given.
    fn ask(&mut self, question: Question) -> Result<Answer, IntakeError>;

    /// Ask every question in order and return the completed record.
    fn collect(&mut self) -> Result<UserAnswers, IntakeError> {
        let mut answers = UserAnswers::new();
        for question in Question::ALL {
            let answer = self.ask(question)?;
            answers.set(question, answer);
        }
        Ok(answers)
    }
}

/// Interactive intake over a line reader and a prompt writer.
pub struct ConsoleIntake<R, W> {
    input: R,
    output: W,
    vocabulary: Vocabulary,
}

impl<R: BufRead, W: Write> ConsoleIntake<R, W> {
    pub fn new(input: R, output: W, vocabulary: Vocabulary) -> Self {
        Self {
            input,
            output,
            vocabulary,
        }
    }
}

impl<R: BufRead, W: Write> AnswerIntake for ConsoleIntake<R, W> {
    fn ask(&mut self, question: Question) -> Result<Answer, IntakeError> {
        loop {
            write!(self.output, "{} (yes/no): ", question.prompt())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(IntakeError::InputClosed(question.key().to_string()));
            }

            match self.vocabulary.parse(line.trim()) {
                Some(answer) => {
                    debug!(question = %question, answer = %answer, "answer accepted");
                    return Ok(answer);
                }
                None => {
                    debug!(question = %question, input = line.trim(), "answer rejected");
                    writeln!(self.output, "{}", REPROMPT_MESSAGE)?;
                }
            }
        }
    }
}

/// Intake that replays a prepared record. Records every question asked.
#[derive(Debug, Clone)]
pub struct ScriptedIntake {
    answers: UserAnswers,
    asked: Vec<Question>,
}

impl ScriptedIntake {
    pub fn new(answers: UserAnswers) -> Self {
        Self {
            answers,
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }
}

impl AnswerIntake for ScriptedIntake {
    fn ask(&mut self, question: Question) -> Result<Answer, IntakeError> {
        self.asked.push(question);
        match self.answers.get(question) {
            Answer::Unset => Err(IntakeError::InputClosed(question.key().to_string())),
            answer => Ok(answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleIntake<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleIntake::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Vocabulary::default(),
        )
    }

    #[test]
    fn test_console_accepts_exact_answers() {
        let mut intake = console("yes\nno\n");
        assert_eq!(intake.ask(Question::HasPc).unwrap(), Answer::Yes);
        assert_eq!(intake.ask(Question::HasXbox).unwrap(), Answer::No);
    }

    #[test]
    fn test_console_reprompts_on_invalid_input() {
        let mut intake = console("maybe\nYes\n\nyes\n");
        assert_eq!(intake.ask(Question::LikesRpg).unwrap(), Answer::Yes);

        let output = String::from_utf8(intake.output.clone()).unwrap();
        assert_eq!(output.matches(REPROMPT_MESSAGE).count(), 3);
        assert_eq!(output.matches(Question::LikesRpg.prompt()).count(), 4);
    }

    #[test]
    fn test_console_reports_closed_input() {
        let mut intake = console("yes\n");
        intake.ask(Question::HasPc).unwrap();
        let err = intake.ask(Question::HasPlaystation).unwrap_err();
        assert!(matches!(err, IntakeError::InputClosed(q) if q == "has-playstation"));
    }

    #[test]
    fn test_console_collects_in_order() {
        let mut intake = console("yes\nno\nno\nyes\nno\nno\nno\nno\nno\nyes\n");
        let answers = intake.collect().unwrap();

        assert!(answers.is_complete());
        assert!(answers.is_yes(Question::HasPc));
        assert!(answers.is_yes(Question::LikesAction));
        assert!(answers.is_yes(Question::ShortSessions));
        assert!(!answers.is_yes(Question::HasOnline));

        let output = String::from_utf8(intake.output.clone()).unwrap();
        let pc = output.find(Question::HasPc.prompt()).unwrap();
        let short = output.find(Question::ShortSessions.prompt()).unwrap();
        assert!(pc < short);
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = Vocabulary {
            yes: vec!["yes".into(), "y".into()],
            no: vec!["no".into(), "n".into()],
        };
        let mut intake = ConsoleIntake::new(Cursor::new(b"y\nn\n".to_vec()), Vec::new(), vocabulary);
        assert_eq!(intake.ask(Question::HasPc).unwrap(), Answer::Yes);
        assert_eq!(intake.ask(Question::HasXbox).unwrap(), Answer::No);
    }

    #[test]
    fn test_scripted_intake_asks_fixed_order() {
        let mut intake = ScriptedIntake::new(UserAnswers::with_yes(&[Question::HasXbox]));
        let answers = intake.collect().unwrap();

        assert!(answers.is_yes(Question::HasXbox));
        assert_eq!(intake.asked(), &Question::ALL);
    }

    #[test]
    fn test_scripted_intake_with_unset_answer() {
        let mut intake = ScriptedIntake::new(UserAnswers::new());
        assert!(intake.collect().is_err());
        assert_eq!(intake.asked().len(), 1);
    }
}
