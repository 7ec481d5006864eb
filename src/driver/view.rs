//! Results views and confirmation prompts

use std::io::{self, BufRead, Write};

/// Where run output goes
pub trait ResultsView: Send {
    /// Remove earlier results
    fn clear(&mut self);
    /// Add one result line
    fn append(&mut self, message: &str);
    /// Show or hide the in-progress indicator
    fn set_busy(&mut self, busy: bool);
}

/// Asks the operator before anything is sent
pub trait Confirm: Send {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Prints results to a writer, one per line
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ResultsView for TerminalView<W> {
    fn clear(&mut self) {}

    fn append(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            let _ = writeln!(self.out, "Deleting...");
        }
        let _ = self.out.flush();
    }
}

/// Collects results in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingView {
    pub messages: Vec<String>,
    pub busy: bool,
    /// Every busy transition, in order
    pub busy_changes: Vec<bool>,
}

impl ResultsView for RecordingView {
    fn clear(&mut self) {
        self.messages.clear();
    }

    fn append(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.busy_changes.push(busy);
    }
}

/// Reads a y/N answer from stdin
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

/// Fixed answer, for `--yes` and tests
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
