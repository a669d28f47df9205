use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;

use rustyline::completion::Pair;

use crate::core::env::SearchPath;

/// Completes the command word from built-in names and the executables that
/// the current search path would find.
#[derive(Clone, Debug, Default)]
pub struct CommandCompleter {
    builtins: Vec<&'static str>,
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new(builtins: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            builtins: builtins.into_iter().collect(),
            commands: BTreeSet::new(),
        }
    }

    /// Rescans the directories of `search_path`.
    pub fn refresh(&mut self, search_path: &SearchPath) {
        self.commands.clear();
        self.commands.extend(self.builtins.iter().map(|s| s.to_string()));

        for entry in search_path.entries() {
            let Ok(dir) = fs::read_dir(entry) else {
                continue;
            };
            for item in dir.filter_map(Result::ok) {
                let Ok(metadata) = item.metadata() else {
                    continue;
                };
                if !metadata.is_file() || metadata.permissions().mode() & 0o111 == 0 {
                    continue;
                }
                if let Some(name) = item.file_name().to_str() {
                    self.commands.insert(name.to_string());
                }
            }
        }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
