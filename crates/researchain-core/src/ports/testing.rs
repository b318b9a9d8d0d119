//! In-memory fakes of the ports.
//!
//! Available to this crate's tests and, through the `test-utils` feature, to
//! downstream crates.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
    CapturedOutput, CommandLine, CommandRunner, CommandStatus, HostingClientPort, HostingError,
    NewRepository, ProcessError,
};
use crate::domain::{Credential, RepoDescriptor};

/// A runner that records every command and answers from a script.
///
/// Unscripted steps exit 0 with empty stdout.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<CommandLine>>>,
    exits: Arc<Mutex<HashMap<&'static str, i32>>>,
    stdout: Arc<Mutex<HashMap<&'static str, Vec<u8>>>>,
    unspawnable: Arc<Mutex<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the step labelled `step` exit with `code`.
    #[must_use]
    pub fn with_exit(self, step: &'static str, code: i32) -> Self {
        self.exits.lock().unwrap().insert(step, code);
        self
    }

    /// Make captured runs of `step` print `stdout`.
    #[must_use]
    pub fn with_stdout(self, step: &'static str, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout.lock().unwrap().insert(step, stdout.into());
        self
    }

    /// Make every command for `program` fail to start.
    #[must_use]
    pub fn with_missing_program(self, program: impl Into<String>) -> Self {
        self.unspawnable.lock().unwrap().push(program.into());
        self
    }

    /// All commands seen so far, in order.
    pub fn calls(&self) -> Vec<CommandLine> {
        self.calls.lock().unwrap().clone()
    }

    /// Step labels seen so far, in order.
    pub fn steps(&self) -> Vec<&'static str> {
        self.calls().iter().map(CommandLine::step).collect()
    }

    /// Commands rendered the way they are echoed (secrets masked).
    pub fn rendered(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    fn answer(&self, command: &CommandLine) -> Result<CommandStatus, ProcessError> {
        self.calls.lock().unwrap().push(command.clone());

        if self
            .unspawnable
            .lock()
            .unwrap()
            .iter()
            .any(|p| p == command.program())
        {
            return Err(ProcessError::SpawnFailed {
                step: command.step().to_string(),
                program: command.program().to_string(),
                reason: "No such file or directory".to_string(),
            });
        }

        let code = self
            .exits
            .lock()
            .unwrap()
            .get(command.step())
            .copied()
            .unwrap_or(0);
        Ok(CommandStatus::from_code(code))
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine) -> Result<CommandStatus, ProcessError> {
        self.answer(command)
    }

    fn capture(&self, command: &CommandLine) -> Result<CapturedOutput, ProcessError> {
        let status = self.answer(command)?;
        let stdout = self
            .stdout
            .lock()
            .unwrap()
            .get(command.step())
            .cloned()
            .unwrap_or_default();
        Ok(CapturedOutput { status, stdout })
    }
}

/// A hosting client that returns a canned outcome and records requests.
#[derive(Clone)]
pub struct FakeHostingClient {
    owner: String,
    reject: Option<(u16, String)>,
    requests: Arc<Mutex<Vec<NewRepository>>>,
}

impl FakeHostingClient {
    /// Every creation succeeds with `owner` as the owner login.
    pub fn owned_by(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            reject: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every creation fails with the given status and body.
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self {
            owner: String::new(),
            reject: Some((status, body.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<NewRepository> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostingClientPort for FakeHostingClient {
    async fn create_repository(
        &self,
        request: &NewRepository,
        _credential: &Credential,
    ) -> Result<RepoDescriptor, HostingError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reject {
            Some((status, body)) => Err(HostingError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(RepoDescriptor::new(self.owner.clone(), request.name.clone())),
        }
    }
}
