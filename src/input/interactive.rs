use rustyline::{config::Configurer, error::ReadlineError, history::DefaultHistory, Editor};

use super::{LineSource, ReadOutcome, ShellCompleter};
use crate::core::ShellState;
use crate::error::ShellError;

/// Terminal input through a line editor. History lives only as long as the session.
pub struct InteractiveSource {
    editor: Editor<ShellCompleter, DefaultHistory>,
    prompt: String,
}

impl InteractiveSource {
    pub fn new(prompt: &str, completer: ShellCompleter) -> Result<Self, ShellError> {
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        Ok(Self {
            editor,
            prompt: prompt.to_string(),
        })
    }
}

impl LineSource for InteractiveSource {
    fn read_line(&mut self) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Retry),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    // `cd` changes what `./` holds and `path` changes the directories, so
    // rescan after every line.
    fn line_done(&mut self, state: &ShellState) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.refresh_commands(&state.search_path);
        }
    }
}
