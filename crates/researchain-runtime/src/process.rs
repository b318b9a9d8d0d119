//! Blocking command runner backed by `std::process::Command`.

use std::io::Write;
use std::process::{Command, ExitStatus, Stdio};

use researchain_core::{CapturedOutput, CommandLine, CommandRunner, CommandStatus, ProcessError};
use tracing::{debug, info};

/// Runs commands as child processes of this one.
///
/// With echo enabled, each command is printed to stdout as `>>> <command>`
/// (secrets masked) before it starts.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    echo: bool,
}

impl SystemCommandRunner {
    pub const fn new() -> Self {
        Self { echo: false }
    }

    #[must_use]
    pub const fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    fn command(&self, line: &CommandLine) -> Command {
        if self.echo {
            let mut stdout = std::io::stdout().lock();
            // Echo is best effort; a closed stdout must not abort the step.
            let _ = writeln!(stdout, ">>> {line}");
            let _ = stdout.flush();
        }

        let mut cmd = Command::new(line.program());
        cmd.args(line.argv());
        if let Some(dir) = line.dir() {
            cmd.current_dir(dir);
        }
        cmd
    }
}

fn spawn_failed(line: &CommandLine, err: &std::io::Error) -> ProcessError {
    ProcessError::SpawnFailed {
        step: line.step().to_string(),
        program: line.program().to_string(),
        reason: err.to_string(),
    }
}

fn to_status(status: ExitStatus) -> CommandStatus {
    CommandStatus {
        code: status.code(),
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, line: &CommandLine) -> Result<CommandStatus, ProcessError> {
        info!(step = line.step(), command = %line, "Running");
        let status = self
            .command(line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| spawn_failed(line, &e))?;

        let status = to_status(status);
        debug!(step = line.step(), code = ?status.code, "Finished");
        Ok(status)
    }

    fn capture(&self, line: &CommandLine) -> Result<CapturedOutput, ProcessError> {
        info!(step = line.step(), command = %line, "Running (captured)");
        let output = self
            .command(line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| spawn_failed(line, &e))?;

        let status = to_status(output.status);
        debug!(
            step = line.step(),
            code = ?status.code,
            bytes = output.stdout.len(),
            "Finished (captured)"
        );
        Ok(CapturedOutput {
            status,
            stdout: output.stdout,
        })
    }
}
