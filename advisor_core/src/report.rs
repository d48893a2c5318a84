//! Result reporter - the boundary that renders messages and the final result.

use std::io::Write;

use game_catalog::Recommendation;

/// Receiver of everything the inference loop wants the user to see.
pub trait ResultReporter {
    /// A production's informational message.
    fn notice(&mut self, message: &str);

    /// The final result of the run.
    fn display(&mut self, result: &Recommendation);
}

/// Render the final result as a sentence.
pub fn format_result(result: &Recommendation) -> String {
    match result {
        Recommendation::Game(title) => format!("Recommended game: {}", title),
        Recommendation::NoRecommendation => {
            "No recommendation: you do not own a PC, PlayStation or Xbox.".to_string()
        }
    }
}

/// Reporter writing plain lines to any writer.
pub struct ConsoleReporter<W> {
    output: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> ResultReporter for ConsoleReporter<W> {
    fn notice(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{}", message) {
            tracing::warn!(error = %err, "failed to write message");
        }
    }

    fn display(&mut self, result: &Recommendation) {
        if let Err(err) = writeln!(self.output, "\n{}\n", format_result(result)) {
            tracing::warn!(error = %err, "failed to write result");
        }
    }
}

/// Reporter that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub notices: Vec<String>,
    pub displayed: Vec<Recommendation>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultReporter for RecordingReporter {
    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn display(&mut self, result: &Recommendation) {
        self.displayed.push(*result);
    }
}
