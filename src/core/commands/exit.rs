use super::{Command, CommandError, CommandOutcome};
use crate::core::ShellState;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    // The controller owns shutdown; this only asks for it.
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<CommandOutcome, CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(format!(
                "exit takes no arguments, got {}",
                args.len()
            )));
        }
        Ok(CommandOutcome::Exit)
    }
}
