use nix::errno::Errno;
use std::io;
use std::num::ParseIntError;
use thiserror::Error;

/// Everything that can go wrong in one invocation. All variants map to
/// exit status 1; the distinction is in what gets printed, and where.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing arguments. Reported as the usage line on
    /// stdout rather than through the logger.
    #[error("invalid usage")]
    Usage,

    #[error("invalid {what} '{input}': {source}")]
    Parse {
        what: &'static str,
        input: String,
        source: ParseIntError,
    },

    #[error("invalid priority value {0} (allowed range is -20..=19)")]
    PriorityOutOfRange(i64),

    #[error("invalid PID {0}")]
    PidOutOfRange(i64),

    #[error("permission denied - are you root?")]
    PermissionDenied,

    #[error("no process found with pid {0}")]
    NoSuchProcess(i32),

    #[error("{call} failed: {errno}")]
    Sys { call: &'static str, errno: Errno },

    #[error("failed to execute '{program}': {source}")]
    Exec { program: String, source: io::Error },
}
