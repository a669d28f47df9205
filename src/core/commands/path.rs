use super::{Command, CommandError, CommandOutcome};
use crate::core::ShellState;

/// `path [dir ...]`: replaces the search path. With no directories nothing
/// external can run until the next `path`.
#[derive(Clone)]
pub struct PathCommand;

impl Default for PathCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PathCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
    ) -> Result<CommandOutcome, CommandError> {
        state.search_path.replace(args);
        tracing::debug!(entries = ?state.search_path.entries(), "search path replaced");
        Ok(CommandOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_keeps_order_and_duplicates() {
        let cmd = PathCommand::new();
        let mut state = ShellState::default();
        let args: Vec<String> = ["b", "a", "b"].iter().map(|s| s.to_string()).collect();

        assert!(matches!(cmd.execute(&args, &mut state), Ok(CommandOutcome::Continue)));
        assert_eq!(state.search_path.entries(), ["b/", "a/", "b/"]);
    }

    #[test]
    fn test_path_without_arguments_empties_search_path() {
        let cmd = PathCommand::new();
        let mut state = ShellState::default();

        assert!(cmd.execute(&[], &mut state).is_ok());
        assert!(state.search_path.is_empty());
    }
}
