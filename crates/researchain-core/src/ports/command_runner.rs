//! Port for running external commands (`git`, `pip`).

use std::fmt;
use std::path::{Path, PathBuf};

use super::ProcessError;

/// Placeholder printed in place of secret arguments.
const MASK: &str = "***";

#[derive(Clone, PartialEq, Eq)]
struct CommandArg {
    value: String,
    secret: bool,
}

impl fmt::Debug for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.secret {
            f.write_str(MASK)
        } else {
            fmt::Debug::fmt(&self.value, f)
        }
    }
}

/// A single external command, labelled with the step it performs.
///
/// `Display` renders the command with secret arguments masked, so it is
/// safe to log or echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    step: &'static str,
    program: String,
    args: Vec<CommandArg>,
    current_dir: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(step: &'static str, program: impl Into<String>) -> Self {
        Self {
            step,
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(CommandArg {
            value: value.into(),
            secret: false,
        });
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self = self.arg(value);
        }
        self
    }

    /// Add an argument that must never be printed.
    #[must_use]
    pub fn secret_arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(CommandArg {
            value: value.into(),
            secret: true,
        });
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub const fn step(&self) -> &'static str {
        self.step
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Real argument values, secrets included. Only runners should call this.
    pub fn argv(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| a.value.as_str())
    }

    pub fn dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Whether the arguments, ignoring secret ones, match `expected` exactly.
    pub fn has_args(&self, expected: &[&str]) -> bool {
        self.args.len() == expected.len()
            && self
                .args
                .iter()
                .zip(expected)
                .all(|(a, e)| a.secret || a.value == *e)
    }

    /// Build the error for an unsuccessful exit of this command.
    pub fn failed(&self, status: CommandStatus) -> ProcessError {
        ProcessError::StepFailed {
            step: self.step.to_string(),
            code: status.code,
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.secret {
                write!(f, " {MASK}")?;
            } else if arg.value.is_empty() || arg.value.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg.value)?;
            } else {
                write!(f, " {}", arg.value)?;
            }
        }
        Ok(())
    }
}

/// How a finished command exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }
}

/// Exit status plus captured standard output.
///
/// Output is kept as raw bytes; tools such as `pip freeze` may print paths
/// that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    pub status: CommandStatus,
    pub stdout: Vec<u8>,
}

impl CapturedOutput {
    /// Whether nothing but whitespace was printed.
    pub fn is_blank(&self) -> bool {
        self.stdout.trim_ascii().is_empty()
    }
}

/// Port for executing external commands.
///
/// Implementations block until the child exits. They only report how it
/// exited; deciding whether a non-zero exit is fatal is up to the caller.
pub trait CommandRunner: Send + Sync {
    /// Run with inherited stdio so the user sees the tool's own output.
    fn run(&self, command: &CommandLine) -> Result<CommandStatus, ProcessError>;

    /// Run with stdout captured.
    fn capture(&self, command: &CommandLine) -> Result<CapturedOutput, ProcessError>;
}
