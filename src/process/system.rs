use crate::process::traits::{CommandRunner, CommandSpec, ExitOutcome};
use std::io;
use std::process::{Command, Stdio};

/// Runs commands as real child processes sharing this process's console
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec) -> io::Result<ExitOutcome> {
        tracing::debug!("Running: {}", command);

        let mut child = Command::new(&command.program);
        child
            .args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &command.current_dir {
            child.current_dir(dir);
        }

        let status = child.status()?;

        let outcome = ExitOutcome::from(status);
        tracing::debug!("{} exited with {}", command.program, outcome);
        Ok(outcome)
    }
}
