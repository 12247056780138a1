//! Presenter interface for confirmation prompts.
//!
//! The policy core hands the host a title, the two button labels, and an
//! accept continuation; how the prompt is rendered (alert sheet, terminal
//! y/N, ...) is the host's business. Presentation may complete
//! asynchronously from the caller's point of view; the contract is only
//! that `on_accept` runs when the user picks the action button and is
//! dropped otherwise.

/// Trait implemented by the hosting application's prompt surface.
pub trait Presenter {
    /// Show a two-button confirmation. `action` is the affirmative,
    /// preferred button; `cancel` dismisses. Invoke `on_accept` only on
    /// accept.
    fn confirm<'a>(
        &self,
        title: &str,
        cancel: &str,
        action: &str,
        on_accept: Box<dyn FnOnce() + 'a>,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Presenter that immediately accepts.
    struct AcceptAll;

    impl Presenter for AcceptAll {
        fn confirm<'a>(
            &self,
            _title: &str,
            _cancel: &str,
            _action: &str,
            on_accept: Box<dyn FnOnce() + 'a>,
        ) {
            on_accept();
        }
    }

    #[test]
    fn accept_runs_the_continuation() {
        let accepted = Cell::new(false);
        let presenter: &dyn Presenter = &AcceptAll;
        presenter.confirm("title", "Cancel", "Open", Box::new(|| accepted.set(true)));
        assert!(accepted.get());
    }
}
