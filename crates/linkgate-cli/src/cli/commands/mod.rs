//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod decide;
mod open;
mod rules;

pub use completions::run_completions;
pub use decide::run_decide;
pub use open::run_open;
pub use rules::run_rules;
