use std::collections::BTreeMap;

mod cd;
mod exit;
mod path;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use path::PathCommand;

use super::{Invocation, ShellState};

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the controller should do after a built-in finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[String], state: &mut ShellState)
        -> Result<CommandOutcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Path(PathCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandOutcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
            CommandType::Path(cmd) => cmd.execute(args, state),
        }
    }
}

/// Runs the commands the shell handles in-process.
#[derive(Clone)]
pub struct BuiltinDispatcher {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for BuiltinDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinDispatcher {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("path", CommandType::Path(PathCommand::new()));
        Self { commands }
    }

    /// Runs `invocation` if it names a built-in.
    ///
    /// Returns `None` when the name is not a built-in, leaving the command to
    /// the external executor. Built-ins see every token after their name; a
    /// `>` clause is just more arguments to them.
    pub fn dispatch(
        &self,
        invocation: &Invocation,
        state: &mut ShellState,
    ) -> Option<Result<CommandOutcome, CommandError>> {
        let cmd = self.commands.get(invocation.name())?;
        let args = invocation.raw_args();

        tracing::debug!(builtin = invocation.name(), ?args, "running built-in");
        Some(cmd.execute(args, state))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}
