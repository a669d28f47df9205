mod orchestrator;

pub use orchestrator::{LineOrchestrator, LineOutcome};

use crate::{
    config::{InputMode, ShellConfig},
    core::ShellState,
    error::ShellError,
    input::{open_scripts, InteractiveSource, LineSource, ReadOutcome, ScriptSource, ShellCompleter},
    process::signal::InterruptFlag,
};

/// The controller: owns the state, pulls lines from its source and hands
/// each one to the orchestrator.
pub struct Shell {
    source: Box<dyn LineSource>,
    state: ShellState,
    orchestrator: LineOrchestrator,
}

impl Shell {
    /// Sets up input and signal handling.
    ///
    /// In script mode every script is opened and checked here, before any
    /// line runs, and SIGINT keeps its default action. Only the interactive
    /// shell survives Ctrl-C.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let state = ShellState::new(config.search_path);

        let (source, orchestrator): (Box<dyn LineSource>, _) = match &config.mode {
            InputMode::Script(paths) => {
                let file = open_scripts(paths)?;
                tracing::debug!(scripts = ?paths, "running in script mode");
                (Box::new(ScriptSource::from_file(file)), LineOrchestrator::new())
            }
            InputMode::Interactive => {
                let orchestrator = LineOrchestrator::new().with_interrupts(InterruptFlag::install()?);
                let completer = ShellCompleter::new(orchestrator.builtins().names(), &state.search_path);
                (Box::new(InteractiveSource::new(&config.prompt, completer)?), orchestrator)
            }
        };

        Ok(Self::with_source(source, state, orchestrator))
    }

    pub fn with_source(
        source: Box<dyn LineSource>,
        state: ShellState,
        orchestrator: LineOrchestrator,
    ) -> Self {
        Shell {
            source,
            state,
            orchestrator,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let line = match self.source.read_line()? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Retry => continue,
                ReadOutcome::Eof => {
                    tracing::debug!("end of input");
                    return Ok(());
                }
            };

            if self.orchestrator.run_line(&line, &mut self.state) == LineOutcome::Exit {
                tracing::debug!("exit requested");
                return Ok(());
            }
            self.source.line_done(&self.state);
        }
    }
}
