use crate::core::tokenizer::REDIRECT;
use crate::error::ShellError;

/// Checks where `>` appears in a command.
///
/// A redirect may not open or close the command, may not be followed by
/// another `>`, and must be followed by exactly one file name.
pub fn is_valid_redirection(tokens: &[String]) -> bool {
    let last = tokens.len().saturating_sub(1);

    tokens.iter().enumerate().all(|(i, token)| {
        if token != REDIRECT {
            return true;
        }
        if i == 0 || i == last || last - i > 1 {
            return false;
        }
        tokens[i + 1] != REDIRECT
    })
}

/// A validated command, split into its arguments and optional output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
    argv_len: usize,
    target: Option<String>,
}

impl Invocation {
    pub fn parse(tokens: &[String]) -> Result<Self, ShellError> {
        if tokens.is_empty() || !is_valid_redirection(tokens) {
            return Err(ShellError::InvalidRedirection(tokens.to_vec()));
        }

        let (argv_len, target) = match tokens.iter().position(|t| t == REDIRECT) {
            Some(pos) => (pos, tokens.get(pos + 1).cloned()),
            None => (tokens.len(), None),
        };
        Ok(Self {
            tokens: tokens.to_vec(),
            argv_len,
            target,
        })
    }

    /// The command name, token 0.
    pub fn name(&self) -> &str {
        // parse() guarantees a non-empty argv: `>` can never be first.
        &self.tokens[0]
    }

    /// Arguments after the command name, up to the redirect.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..self.argv_len]
    }

    /// Every token after the command name, redirect clause included.
    ///
    /// Built-ins get these: `path a > b` names three directories.
    pub fn raw_args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
