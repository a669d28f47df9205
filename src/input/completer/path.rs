use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

#[derive(Clone, Debug, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    /// Completes `incomplete` against the entries of its parent directory.
    ///
    /// Directories complete with a trailing `/`, files with a trailing space.
    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir, prefix) = split_input(incomplete);
        let Ok(entries) = fs::read_dir(if dir.is_empty() { "." } else { dir }) else {
            return Vec::new();
        };

        let mut matches: Vec<Pair> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                if !name.starts_with(prefix) {
                    return None;
                }
                Some(completion_pair(dir, &name, &entry.path()))
            })
            .collect();

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits `"src/ma"` into `("src/", "ma")`; the directory part keeps its slash.
fn split_input(incomplete: &str) -> (&str, &str) {
    match incomplete.rfind('/') {
        Some(pos) => incomplete.split_at(pos + 1),
        None => ("", incomplete),
    }
}

fn completion_pair(dir: &str, name: &str, path: &Path) -> Pair {
    let full = PathBuf::from(dir).join(name).to_string_lossy().into_owned();
    if path.is_dir() {
        Pair {
            display: format!("{}/", name),
            replacement: format!("{}/", full),
        }
    } else {
        Pair {
            display: name.to_string(),
            replacement: format!("{} ", full),
        }
    }
}
