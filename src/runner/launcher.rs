use log::{debug, error, info};
use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;

/// Replaces the current process image with the requested command.
///
/// This is `execvp` semantics through `std::process::Command`: the name
/// is searched on PATH, argv[0] is the name itself, and the environment
/// and open file descriptors carry over untouched. No fork happens, so
/// there is never a child to reap or leave dangling.
pub struct Launcher {
    program: String,
    args: Vec<String>,
}

impl Launcher {
    pub fn new(program: String, args: Vec<String>) -> Self {
        debug!("Creating launcher for '{program}' with args: {args:?}");
        Self { program, args }
    }

    /// Perform the exec. On success this never returns; the returned
    /// error is always the reason the replacement failed.
    pub fn exec(self) -> io::Error {
        info!("Replacing process image with '{}'", self.program);

        let error = Command::new(&self.program).args(&self.args).exec();

        // *If* we get here, exec has failed
        error!("Failed to execute '{}': {}", self.program, error);
        error
    }
}
