//! Application configuration from CLI flags and environment.

use clap::Parser;

/// santa — Secret-Santa assignment generator with exclusion constraints.
#[derive(Parser, Debug)]
#[command(name = "santa", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Path to the roster JSON file.
    #[arg(short, long, env = "SANTA_ROSTER", required_unless_present = "completion")]
    pub roster: Option<String>,

    /// Maximum number of attempts before giving up (0 = default of 1000).
    #[arg(long, default_value = "0", env = "SANTA_MAX_ATTEMPTS")]
    pub max_attempts: u32,

    /// Seed for reproducible runs. Omit for OS randomness.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between attempts, for the live counter (e.g. "20ms"). Empty
    /// disables the pause.
    #[arg(long, default_value = "")]
    pub attempt_pause: String,

    /// Abort generation after this duration (e.g. "30s"). "0" disables.
    #[arg(long, default_value = "0")]
    pub timeout: String,

    /// Verbose output (include participant ids).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only print giver -> receiver lines).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the assignment as JSON to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the dispatch request body (notices) as JSON to this file.
    #[arg(long)]
    pub notices: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parsed pause between attempts, if any.
    #[must_use]
    pub fn attempt_pause_duration(&self) -> Option<std::time::Duration> {
        parse_duration(&self.attempt_pause).filter(|d| !d.is_zero())
    }

    /// Parsed timeout, if enabled.
    #[must_use]
    pub fn timeout_duration(&self) -> Option<std::time::Duration> {
        parse_duration(&self.timeout).filter(|d| !d.is_zero())
    }
}

/// Parse a duration string like "20ms", "30s", "5m", "1h".
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("20ms"), Some(Duration::from_millis(20)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("7"), Some(Duration::from_secs(7)));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
    }

    #[test]
    fn zero_timeout_means_disabled() {
        let config = AppConfig::try_parse_from(["santa", "--roster", "r.json"]).unwrap();
        assert_eq!(config.timeout_duration(), None);
        assert_eq!(config.attempt_pause_duration(), None);
    }

    #[test]
    fn pause_flag_parses() {
        let config = AppConfig::try_parse_from([
            "santa",
            "--roster",
            "r.json",
            "--attempt-pause",
            "20ms",
        ])
        .unwrap();
        assert_eq!(
            config.attempt_pause_duration(),
            Some(Duration::from_millis(20))
        );
    }

    #[test]
    fn roster_required_without_completion() {
        assert!(AppConfig::try_parse_from(["santa"]).is_err());
        assert!(AppConfig::try_parse_from(["santa", "--completion", "bash"]).is_ok());
    }
}
