//! Terminal output for command results and status messages.

use console::{Style, Term};

/// Terminal writer.
///
/// Results (routes, footer lines, JSON) go to stdout so they can be piped;
/// status lines go to stderr, colored when it is a terminal.
pub(crate) struct Output {
    stdout: Term,
    stderr: Term,
    title: Style,
    ok: Style,
    warn: Style,
    fail: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            title: Style::new().cyan().bold(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }

    /// Write a result line to stdout.
    pub(crate) fn line(&self, msg: &str) {
        let _ = self.stdout.write_line(msg);
    }

    /// Write a plain status line.
    pub(crate) fn info(&self, msg: &str) {
        self.status(None, msg);
    }

    /// Page title above footer links.
    pub(crate) fn highlight(&self, msg: &str) {
        self.status(Some(&self.title), msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.status(Some(&self.ok), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.status(Some(&self.warn), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.status(Some(&self.fail), msg);
    }

    fn status(&self, style: Option<&Style>, msg: &str) {
        let text = match style {
            Some(style) => style.apply_to(msg).to_string(),
            None => msg.to_owned(),
        };
        let _ = self.stderr.write_line(&text);
    }
}
