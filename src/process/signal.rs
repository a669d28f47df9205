use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::SIGINT;

use crate::process::ProcessError;

/// Keeps SIGINT from killing the shell.
///
/// Children reset the handler on exec, so an interrupt typed while a line is
/// running still reaches them; the shell only records that it happened.
#[derive(Debug, Clone)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn install() -> Result<Self, ProcessError> {
        let raised = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(SIGINT, Arc::clone(&raised))
            .map_err(|e| ProcessError::SignalError(e.to_string()))?;
        Ok(Self { raised })
    }

    /// Returns whether SIGINT arrived since the last call, clearing the flag.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::Relaxed)
    }
}
