mod completer;
mod interactive;
pub mod script;

pub use completer::ShellCompleter;
pub use interactive::InteractiveSource;
pub use script::{open_scripts, ScriptSource};

use crate::core::ShellState;
use crate::error::ShellError;

/// Result of asking a source for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Nothing was read but the source is still open; ask again.
    Retry,
    Eof,
}

/// Where the controller gets its lines from.
pub trait LineSource {
    fn read_line(&mut self) -> Result<ReadOutcome, ShellError>;

    /// Called after each line has been fully processed.
    fn line_done(&mut self, _state: &ShellState) {}
}
