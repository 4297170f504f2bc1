use log::debug;
use nix::errno::Errno;

use crate::common::Error;

/// Lowest niceness value accepted on the command line (highest priority).
pub const NICE_MIN: i32 = -20;

/// Highest niceness value accepted on the command line (lowest priority).
pub const NICE_MAX: i32 = 19;

/// Set the niceness of an already-running process.
pub fn set(pid: i32, priority: i32) -> Result<(), Error> {
    debug!("setpriority(PRIO_PROCESS, {pid}, {priority})");

    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, pid as libc::id_t, priority) };
    if rc == -1 {
        return Err(classify(Errno::last(), "setpriority", pid));
    }

    Ok(())
}

/// Set the niceness of the calling process itself. Used right before an
/// exec so the launched command inherits the requested value.
pub fn set_own(priority: i32) -> Result<(), Error> {
    debug!("setpriority(PRIO_PROCESS, self, {priority})");

    // who = 0 names the calling process
    let rc = unsafe { libc::setpriority(libc::PRIO_PROCESS, 0, priority) };
    if rc == -1 {
        return Err(classify(Errno::last(), "setpriority", std::process::id() as i32));
    }

    Ok(())
}

/// Read back the niceness of a process.
///
/// -1 is a legal niceness, so success cannot be told apart from failure
/// by the return value alone: errno is cleared right before the call and
/// consulted afterwards. A stale errno from an earlier call must never be
/// misread as this call failing.
pub fn get(pid: i32) -> Result<i32, Error> {
    Errno::clear();
    let prio = unsafe { libc::getpriority(libc::PRIO_PROCESS, pid as libc::id_t) };
    if prio == -1 && Errno::last_raw() != 0 {
        return Err(classify(Errno::last(), "getpriority", pid));
    }

    debug!("getpriority(PRIO_PROCESS, {pid}) = {prio}");
    Ok(prio)
}

fn classify(errno: Errno, call: &'static str, pid: i32) -> Error {
    match errno {
        Errno::EPERM | Errno::EACCES => Error::PermissionDenied,
        Errno::ESRCH => Error::NoSuchProcess(pid),
        _ => Error::Sys { call, errno },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Far above the kernel's pid ceiling (pid_max tops out at 2^22), so
    // the lookup always fails with ESRCH no matter what is running.
    const ABSENT_PID: i32 = i32::MAX;

    fn own_pid() -> i32 {
        std::process::id() as i32
    }

    #[test]
    #[serial]
    fn own_priority_is_readable() {
        let prio = get(own_pid()).unwrap();
        assert!((NICE_MIN..=NICE_MAX).contains(&prio));
    }

    #[test]
    #[serial]
    fn setting_own_priority_to_current_value_succeeds() {
        // Keeping the value unchanged needs no privilege, and leaves the
        // test runner's niceness alone.
        let current = get(own_pid()).unwrap();
        set_own(current).unwrap();
        assert_eq!(get(own_pid()).unwrap(), current);
    }

    #[test]
    fn reading_absent_pid_names_it() {
        match get(ABSENT_PID) {
            Err(Error::NoSuchProcess(pid)) => assert_eq!(pid, ABSENT_PID),
            other => panic!("expected NoSuchProcess, got {other:?}"),
        }
    }

    #[test]
    fn setting_absent_pid_names_it() {
        match set(ABSENT_PID, 10) {
            Err(Error::NoSuchProcess(pid)) => assert_eq!(pid, ABSENT_PID),
            other => panic!("expected NoSuchProcess, got {other:?}"),
        }
    }
}
