use super::env::SearchPath;

/// Mutable state owned by the controller for the whole run.
#[derive(Debug, Clone, Default)]
pub struct ShellState {
    pub search_path: SearchPath,
}

impl ShellState {
    pub fn new(search_path: SearchPath) -> Self {
        Self { search_path }
    }
}
