//! Constants for assignment generation and process exit codes.

/// Default bound on generation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Minimum number of participants a roster must hold for a cycle to exist.
pub const MIN_PARTICIPANTS: usize = 2;

/// Minimum interval (in milliseconds) between attempt log lines emitted by
/// the logging observer.
pub const LOG_THROTTLE_MS: u64 = 250;

/// Process exit codes used by the `santa` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Attempts exhausted without finding a valid assignment.
    pub const ERROR_EXHAUSTED: i32 = 2;
    /// Roster failed validation.
    pub const ERROR_ROSTER: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Generation cancelled by user (Ctrl+C) or timeout.
    pub const ERROR_CANCELED: i32 = 130;
}
