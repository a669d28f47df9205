use std::io::Write;
use std::path::PathBuf;

use crate::core::commands::CommandError;
use crate::process::ProcessError;

/// The only text the user ever sees on stderr when something goes wrong.
pub const ERROR_MESSAGE: &str = "An error has occurred\n";

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    InvalidRedirection(Vec<String>),
    ScriptUnreadable(PathBuf, std::io::Error),
    ScriptMismatch(PathBuf, PathBuf),
    Command(CommandError),
    Process(ProcessError),
    FlagError(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::InvalidRedirection(tokens) => {
                write!(f, "invalid redirection: {}", tokens.join(" "))
            }
            ShellError::ScriptUnreadable(path, e) => {
                write!(f, "cannot read script {}: {}", path.display(), e)
            }
            ShellError::ScriptMismatch(first, other) => write!(
                f,
                "script {} is not the same file as {}",
                other.display(),
                first.display()
            ),
            ShellError::Command(e) => write!(f, "Command error: {}", e),
            ShellError::Process(e) => write!(f, "Process error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

/// Writes the fixed error message to stderr.
///
/// Callers log the actual cause through `tracing` before calling this, so the
/// user-facing channel stays the same for every kind of failure.
pub fn report() {
    let mut stderr = std::io::stderr().lock();
    // Nothing sensible is left to do if stderr itself is gone.
    let _ = stderr.write_all(ERROR_MESSAGE.as_bytes());
    let _ = stderr.flush();
}

/// Logs `err` at debug level and reports the fixed message.
pub fn report_error(err: &dyn std::error::Error) {
    tracing::debug!(error = %err, "command failed");
    report();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_is_fixed() {
        assert_eq!(ERROR_MESSAGE, "An error has occurred\n");
    }

    #[test]
    fn test_shell_error_display() {
        let errors = vec![
            ShellError::InvalidRedirection(vec![">".to_string(), "out".to_string()]),
            ShellError::ScriptMismatch(PathBuf::from("a.sh"), PathBuf::from("b.sh")),
            ShellError::FlagError("bad flag".to_string()),
            ShellError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "io error")),
            ShellError::Process(ProcessError::CommandNotFound("ls".to_string())),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_from_conversions() {
        let err: ShellError = ProcessError::CommandNotFound("nope".to_string()).into();
        assert!(matches!(err, ShellError::Process(ProcessError::CommandNotFound(_))));

        let err: ShellError = CommandError::InvalidArguments("exit".to_string()).into();
        assert!(matches!(err, ShellError::Command(CommandError::InvalidArguments(_))));
    }
}
