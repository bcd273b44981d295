//! CLI output formatting and file writing.

use std::io::{self, Write};
use std::time::Duration;

use serde_json::to_string_pretty;

use santa_core::assignment::Assignment;
use santa_core::dispatch::Notice;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format an attempt count with thousand separators.
#[must_use]
pub fn format_attempts(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the assignment (edges + attempt count) to a file as JSON.
pub fn write_assignment(path: &str, assignment: &Assignment) -> io::Result<()> {
    let json = to_string_pretty(assignment).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}

/// Write the dispatch request body (notices) to a file as JSON.
pub fn write_notices(path: &str, notices: &[Notice]) -> io::Result<()> {
    let json = to_string_pretty(notices).map_err(io::Error::other)?;
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}
