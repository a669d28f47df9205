use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::{LaunchHandle, ProcessExecutor};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Redirect(String, std::io::Error),
    Spawn(String, std::io::Error),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command not found: {}", cmd),
            ProcessError::Redirect(target, e) => {
                write!(f, "Cannot open {} for writing: {}", target, e)
            }
            ProcessError::Spawn(cmd, e) => write!(f, "Failed to start {}: {}", cmd, e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
