//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter. Status goes to stderr; payload (rendered
/// markdown) goes to stdout so it can be piped.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    green: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            red: Style::new().red(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Write payload text to stdout.
    pub(crate) fn payload(&self, text: &str) {
        let _ = self.stdout.write_line(text);
    }
}
