use crate::core::commands::{BuiltinDispatcher, CommandOutcome};
use crate::core::tokenizer::{split_commands, tokenize};
use crate::core::{Invocation, ShellState};
use crate::error::{self, ShellError};
use crate::process::signal::InterruptFlag;
use crate::process::{LaunchHandle, ProcessExecutor};

/// What the controller does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

enum Step {
    Done,
    Launched(LaunchHandle),
    Exit,
}

/// Runs one input line: every `&`-separated command in order, then waits for
/// all of the processes the line started.
///
/// Built-ins take effect before the next command is looked at, so `path` or
/// `cd` earlier on a line applies to commands later on it. A failing command
/// is reported and the rest of the line still runs. `exit` ends the line at
/// once: later commands are skipped and processes already started are left
/// running without being waited on.
#[derive(Clone, Default)]
pub struct LineOrchestrator {
    builtins: BuiltinDispatcher,
    executor: ProcessExecutor,
    interrupts: Option<InterruptFlag>,
}

impl LineOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interrupts(mut self, interrupts: InterruptFlag) -> Self {
        self.interrupts = Some(interrupts);
        self
    }

    pub fn builtins(&self) -> &BuiltinDispatcher {
        &self.builtins
    }

    pub fn run_line(&self, line: &str, state: &mut ShellState) -> LineOutcome {
        let tokens = tokenize(line);
        let mut handles = Vec::new();

        for command in split_commands(&tokens) {
            match self.run_command(&command, state) {
                Ok(Step::Done) => {}
                Ok(Step::Launched(handle)) => handles.push(handle),
                Ok(Step::Exit) => {
                    tracing::debug!(running = handles.len(), "exit without joining");
                    return LineOutcome::Exit;
                }
                Err(e) => error::report_error(&e),
            }
        }

        self.join_all(handles);
        LineOutcome::Continue
    }

    fn run_command(&self, tokens: &[String], state: &mut ShellState) -> Result<Step, ShellError> {
        let invocation = Invocation::parse(tokens)?;

        if let Some(result) = self.builtins.dispatch(&invocation, state) {
            return match result? {
                CommandOutcome::Continue => Ok(Step::Done),
                CommandOutcome::Exit => Ok(Step::Exit),
            };
        }

        let handle = self.executor.launch(&invocation, &state.search_path)?;
        Ok(Step::Launched(handle))
    }

    fn join_all(&self, handles: Vec<LaunchHandle>) {
        if handles.is_empty() {
            return;
        }
        tracing::debug!(count = handles.len(), "waiting for line");

        for handle in handles {
            handle.join();
        }

        if self.interrupts.as_ref().is_some_and(InterruptFlag::take) {
            tracing::debug!("interrupted while waiting");
        }
    }
}
