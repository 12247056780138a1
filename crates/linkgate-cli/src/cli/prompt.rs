//! Terminal confirmation prompts.

use std::io::{self, BufRead, Write};

use linkgate_core::presenter::Presenter;

/// Presents confirmations on the controlling terminal.
///
/// With `assume_yes` every prompt is accepted without asking (the `--yes`
/// flag). Otherwise anything but an explicit `y`/`yes` counts as cancel,
/// including EOF and read errors.
pub struct TermPresenter {
    assume_yes: bool,
}

impl TermPresenter {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Presenter for TermPresenter {
    fn confirm<'a>(
        &self,
        title: &str,
        cancel: &str,
        action: &str,
        on_accept: Box<dyn FnOnce() + 'a>,
    ) {
        if self.assume_yes {
            on_accept();
            return;
        }

        // External schemes title the prompt with the URL path, which a
        // bare `mailto:` leaves empty.
        if !title.is_empty() {
            println!("{title}");
        }
        print!("{action} / {cancel}? [y/N] ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return;
        }
        if matches!(line.trim().to_lowercase().as_str(), "y" | "yes") {
            on_accept();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn assume_yes_accepts_without_reading_stdin() {
        let accepted = Cell::new(false);
        TermPresenter::new(true).confirm(
            "title",
            "Cancel",
            "Open",
            Box::new(|| accepted.set(true)),
        );
        assert!(accepted.get());
    }
}
