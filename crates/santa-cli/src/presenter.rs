//! CLI result presenter.

use std::time::Duration;

use santa_core::assignment::Assignment;
use santa_core::participant::Roster;

use crate::output::{format_attempts, format_duration};

/// Trait for presenting generation results to the user.
pub trait ResultPresenter {
    /// Present a successful assignment.
    fn present_assignment(&self, assignment: &Assignment, roster: &Roster, duration: Duration);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Presenter writing to stdout/stderr.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CliPresenter {
    fn present_assignment(&self, assignment: &Assignment, roster: &Roster, duration: Duration) {
        if self.quiet {
            for edge in assignment.edges() {
                let giver = roster.get(edge.giver).map_or("?", |p| p.name.as_str());
                let receiver = roster.get(edge.receiver).map_or("?", |p| p.name.as_str());
                println!("{giver} -> {receiver}");
            }
            return;
        }

        crate::ui::print_success(&format!(
            "Found a valid assignment in {} attempt(s) ({})",
            format_attempts(assignment.attempts()),
            format_duration(duration)
        ));
        crate::ui::print_header("Assignments");
        for edge in assignment.edges() {
            let giver = roster.get(edge.giver).map_or("?", |p| p.name.as_str());
            let receiver = roster.get(edge.receiver).map_or("?", |p| p.name.as_str());
            if self.verbose {
                println!("  {giver} (id {}) -> {receiver} (id {})", edge.giver, edge.receiver);
            } else {
                println!("  {giver} -> {receiver}");
            }
        }
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}
