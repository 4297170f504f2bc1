mod cli;
mod common;
mod runner;
mod service;

use cli::Target;
use common::{Error, logging};
use log::{error, info, warn};
use runner::Launcher;
use service::priority;

fn main() {
    if let Err(e) = logging::init(false) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(()) => std::process::exit(0),
        Err(Error::Usage) => {
            println!("{}", cli::USAGE);
            std::process::exit(1);
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Error> {
    let request = cli::parse(&args)?;

    match request.target {
        Target::Pid(pid) => renice(pid, request.priority),
        Target::Command { program, args } => launch(program, args, request.priority),
    }
}

/// Renice an existing process and verify what actually stuck.
fn renice(pid: i32, requested: i32) -> Result<(), Error> {
    priority::set(pid, requested)?;

    // The kernel may clamp the value (RLIMIT_NICE, scheduling policy).
    // A difference is worth a warning but the set itself succeeded.
    match priority::get(pid) {
        Ok(observed) if observed != requested => {
            warn!("Priority of pid {pid} set to {observed} instead of {requested}");
        }
        Ok(observed) => info!("Priority of pid {pid} is now {observed}"),
        Err(e) => warn!("Could not verify priority of pid {pid}: {e}"),
    }

    Ok(())
}

/// Apply the niceness to ourselves, then replace this process with the
/// command. A failed set is fatal: the command is never launched at the
/// wrong niceness.
fn launch(program: String, args: Vec<String>, requested: i32) -> Result<(), Error> {
    priority::set_own(requested)?;

    let source = Launcher::new(program.clone(), args).exec();
    Err(Error::Exec { program, source })
}
