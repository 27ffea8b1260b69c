//! Command runner trait and associated types

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A program and its arguments, run without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,

    /// Working directory of the child; inherited when `None`
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current_dir: None,
        }
    }

    /// Runs the command from `dir` instead of the inherited directory
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The process exited with this status code
    Code(i32),

    /// The process was killed by a signal (number when known)
    Signaled(Option<i32>),
}

impl ExitOutcome {
    /// Only a zero exit code counts as success
    pub fn success(&self) -> bool {
        matches!(self, Self::Code(0))
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => Self::Code(code),
            None => Self::Signaled(signal_of(&status)),
        }
    }
}

#[cfg(unix)]
fn signal_of(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Signaled(Some(signal)) => write!(f, "signal {}", signal),
            Self::Signaled(None) => write!(f, "unknown signal"),
        }
    }
}

/// Trait for launching external commands
///
/// Implementations block until the command finishes. The command's stdout
/// and stderr belong to the console; only the exit outcome is returned.
pub trait CommandRunner {
    /// Runs `command` to completion
    ///
    /// # Returns
    ///
    /// * `Ok(ExitOutcome)` - The command ran and terminated
    /// * `Err(io::Error)` - The command could not be started
    fn run(&mut self, command: &CommandSpec) -> io::Result<ExitOutcome>;
}
