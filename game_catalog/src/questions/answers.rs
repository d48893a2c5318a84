//! The user-answers record.

use serde::{Deserialize, Serialize};

use super::{Answer, Question};

/// All ten answers of one questionnaire run.
///
/// Starts fully `Unset`; intake fills every field before the record enters
/// working memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct UserAnswers {
    answers: [Answer; 10],
}

impl UserAnswers {
    /// Create a record with every answer unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complete record from ten bits, bit `i` answering `Question::ALL[i]`.
    pub fn from_bits(bits: u16) -> Self {
        let mut answers = Self::new();
        for question in Question::ALL {
            answers.set(question, Answer::from(bits & (1 << question.index()) != 0));
        }
        answers
    }

    /// Set answers for the listed questions to `yes` and every other one to `no`.
    pub fn with_yes(questions: &[Question]) -> Self {
        let mut answers = Self::new();
        for question in Question::ALL {
            answers.set(question, Answer::from(questions.contains(&question)));
        }
        answers
    }

    pub fn get(&self, question: Question) -> Answer {
        self.answers[question.index()]
    }

    pub fn set(&mut self, question: Question, answer: Answer) {
        self.answers[question.index()] = answer;
    }

    /// Shorthand for `get(question) == Answer::Yes`.
    pub fn is_yes(&self, question: Question) -> bool {
        self.get(question) == Answer::Yes
    }

    /// Check that no answer is unset.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_set())
    }

    /// Iterate over (question, answer) pairs in asking order.
    pub fn iter(&self) -> impl Iterator<Item = (Question, Answer)> + '_ {
        Question::ALL.iter().map(move |q| (*q, self.get(*q)))
    }
}

impl std::fmt::Display for UserAnswers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(q, a)| format!("{}={}", q.key(), a))
            .collect();
        write!(f, "({})", parts.join(" "))
    }
}
