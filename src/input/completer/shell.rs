use std::borrow::Cow;

use super::{command::CommandCompleter, path::PathCompleter};
use crate::core::env::SearchPath;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Editor helper for interactive sessions: completion plus highlighting.
#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(builtins: impl IntoIterator<Item = &'static str>, search_path: &SearchPath) -> Self {
        let mut command_completer = CommandCompleter::new(builtins);
        command_completer.refresh(search_path);

        ShellCompleter {
            command_completer,
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(),
        }
    }

    pub fn refresh_commands(&mut self, search_path: &SearchPath) {
        self.command_completer.refresh(search_path);
    }
}

/// Where the word under the cursor starts, and whether it is a command name.
///
/// A word is in command position at the start of the line or right after `&`.
fn word_at(line: &str) -> (usize, bool) {
    let start = line
        .rfind([' ', '\t', '>', '&'])
        .map_or(0, |pos| pos + 1);

    let before = line[..start].trim_end_matches([' ', '\t']);
    let is_command = before.is_empty() || before.ends_with('&');
    (start, is_command)
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let (start, is_command) = word_at(line_up_to_cursor);
        let word = &line_up_to_cursor[start..];

        let matches = if is_command {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };

        Ok((start, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at_command_position() {
        assert_eq!(word_at(""), (0, true));
        assert_eq!(word_at("ec"), (0, true));
        assert_eq!(word_at("ls & ec"), (5, true));
        assert_eq!(word_at("ls &ec"), (4, true));
    }

    #[test]
    fn test_word_at_argument_position() {
        assert_eq!(word_at("ls sr"), (3, false));
        assert_eq!(word_at("ls >ou"), (4, false));
        assert_eq!(word_at("ls > "), (5, false));
    }
}
