use super::{Command, CommandError, CommandOutcome};
use crate::core::ShellState;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
    ) -> Result<CommandOutcome, CommandError> {
        let [target] = args else {
            return Err(CommandError::InvalidArguments(format!(
                "cd expects exactly one directory, got {}",
                args.len()
            )));
        };

        env::set_current_dir(target)?;
        tracing::debug!(dir = %target, "changed directory");
        Ok(CommandOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cd_requires_one_argument() {
        let cmd = CdCommand::new();
        let mut state = ShellState::default();

        assert!(matches!(
            cmd.execute(&[], &mut state),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            cmd.execute(&["/".to_string(), "/tmp".to_string()], &mut state),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_cd_invalid() {
        let cmd = CdCommand::new();
        let mut state = ShellState::default();
        assert!(matches!(
            cmd.execute(&["/nonexistent/path".to_string()], &mut state),
            Err(CommandError::IoError(_))
        ));
    }
}
