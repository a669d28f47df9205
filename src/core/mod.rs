pub mod commands;
pub mod env;
pub mod redirect;
pub mod state;
pub mod tokenizer;

pub use redirect::Invocation;
pub use state::ShellState;
