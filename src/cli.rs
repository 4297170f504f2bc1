use crate::common::Error;
use crate::service::priority::{NICE_MAX, NICE_MIN};

pub const USAGE: &str = "Usage: snice -n priority [-p pid | command [args...]]";

/// What the requested priority applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Renice an already-running process.
    Pid(i32),

    /// Apply the niceness to ourselves, then exec the command. The args
    /// are passed through verbatim; no shell is involved.
    Command { program: String, args: Vec<String> },
}

/// Parsed command line, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityRequest {
    pub priority: i32,
    pub target: Target,
}

/// Parse the argument list (program name already stripped).
///
/// The grammar is positional and exact: `-n` must come first, and `-p`
/// selects PID mode only when it is the token right after the priority.
/// Anything else in that position is taken as a command name, matching
/// the classic tools.
pub fn parse(args: &[String]) -> Result<PriorityRequest, Error> {
    if args.len() < 3 {
        return Err(Error::Usage);
    }

    if args[0] != "-n" {
        return Err(Error::Usage);
    }

    let priority = parse_priority(&args[1])?;

    let target = if args[2] == "-p" {
        let raw = args.get(3).ok_or(Error::Usage)?;
        // Tokens after the PID are ignored
        Target::Pid(parse_pid(raw)?)
    } else {
        Target::Command {
            program: args[2].clone(),
            args: args[3..].to_vec(),
        }
    };

    Ok(PriorityRequest { priority, target })
}

fn parse_priority(raw: &str) -> Result<i32, Error> {
    let value = parse_long("priority", raw)?;
    if value < NICE_MIN as i64 || value > NICE_MAX as i64 {
        return Err(Error::PriorityOutOfRange(value));
    }
    Ok(value as i32)
}

fn parse_pid(raw: &str) -> Result<i32, Error> {
    let value = parse_long("PID", raw)?;
    if value < 0 || value > i32::MAX as i64 {
        return Err(Error::PidOutOfRange(value));
    }
    Ok(value as i32)
}

/// Base-10 signed parse with the failure cases kept distinct from range
/// checks: empty input, stray non-digits, and overflow all surface the
/// underlying `ParseIntError`.
fn parse_long(what: &'static str, raw: &str) -> Result<i64, Error> {
    raw.parse::<i64>().map_err(|source| Error::Parse {
        what,
        input: raw.to_string(),
        source,
    })
}
