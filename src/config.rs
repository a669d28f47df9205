use std::path::PathBuf;

use crate::core::env::SearchPath;
use crate::flags::Flags;

/// Printed before every interactive read.
pub const PROMPT: &str = "wish> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Interactive,
    Script(Vec<PathBuf>),
}

/// Everything the shell needs to start, resolved from the command line.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub mode: InputMode,
    pub prompt: String,
    pub search_path: SearchPath,
    pub debug: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::Interactive,
            prompt: PROMPT.to_string(),
            search_path: SearchPath::default(),
            debug: false,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Self {
        let mode = if flags.scripts().is_empty() {
            InputMode::Interactive
        } else {
            InputMode::Script(flags.scripts().iter().map(PathBuf::from).collect())
        };

        Self {
            mode,
            debug: flags.is_set("debug"),
            ..Self::default()
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "wish=debug"
        } else {
            "off"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_interactive_by_default() {
        let config = ShellConfig::from_flags(&Flags::new());
        assert_eq!(config.mode, InputMode::Interactive);
        assert_eq!(config.prompt, "wish> ");
        assert_eq!(config.search_path, SearchPath::default());
        assert_eq!(config.default_log_filter(), "off");
    }

    #[test]
    fn test_script_mode_and_debug() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&["--debug".to_string(), "run.sh".to_string()])?;
        let config = ShellConfig::from_flags(&flags);

        assert_eq!(config.mode, InputMode::Script(vec![PathBuf::from("run.sh")]));
        assert!(config.debug);
        assert_eq!(config.default_log_filter(), "wish=debug");
        Ok(())
    }
}
