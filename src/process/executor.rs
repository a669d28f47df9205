use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

use super::ProcessError;
use crate::core::env::SearchPath;
use crate::core::Invocation;

/// Permission bits for files created by `>`: read, write and execute for the owner.
const REDIRECT_MODE: u32 = 0o700;

/// A running external command. The only thing to do with it is wait.
///
/// Dropping it neither waits for nor kills the process.
#[derive(Debug)]
pub struct LaunchHandle {
    name: String,
    child: Child,
}

impl LaunchHandle {
    /// Blocks until the process ends. The exit status is only logged.
    pub fn join(mut self) {
        match self.child.wait() {
            Ok(status) => {
                tracing::debug!(command = %self.name, pid = self.child.id(), %status, "process finished");
            }
            Err(e) => {
                tracing::debug!(command = %self.name, pid = self.child.id(), error = %e, "wait failed");
            }
        }
    }
}

/// Resolves external commands against the search path and starts them.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Starts `invocation` without waiting for it.
    ///
    /// The program is the first executable `entry + name` in `search_path`;
    /// its `argv[0]` stays the name as typed. With a redirect target, stdout
    /// goes to that file, created or truncated first.
    pub fn launch(
        &self,
        invocation: &Invocation,
        search_path: &SearchPath,
    ) -> Result<LaunchHandle, ProcessError> {
        let name = invocation.name();
        let program = search_path
            .resolve(name)
            .ok_or_else(|| ProcessError::CommandNotFound(name.to_string()))?;

        let mut command = Command::new(&program);
        command.arg0(name).args(invocation.args());

        if let Some(target) = invocation.target() {
            let file = open_redirect(target)
                .map_err(|e| ProcessError::Redirect(target.to_string(), e))?;
            command.stdout(Stdio::from(file));
        }

        // `command` owns the redirect file; it is dropped when this returns,
        // leaving the child as the only holder.
        let child = command
            .spawn()
            .map_err(|e| ProcessError::Spawn(name.to_string(), e))?;

        tracing::debug!(
            command = name,
            program = %program.display(),
            pid = child.id(),
            target = ?invocation.target(),
            "launched"
        );

        Ok(LaunchHandle {
            name: name.to_string(),
            child,
        })
    }
}

fn open_redirect(target: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(REDIRECT_MODE)
        .open(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn invocation(line: &str) -> Invocation {
        Invocation::parse(&tokenize(line)).expect("valid command")
    }

    fn system_path() -> SearchPath {
        SearchPath::from_dirs(&["/bin", "/usr/bin"])
    }

    #[test]
    fn test_launch_unknown_command() {
        let executor = ProcessExecutor::new();
        let result = executor.launch(&invocation("no-such-command-here"), &system_path());
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
    }

    #[test]
    fn test_launch_with_empty_search_path() {
        let executor = ProcessExecutor::new();
        let empty = SearchPath::from_dirs::<&str>(&[]);
        let result = executor.launch(&invocation("sh -c true"), &empty);
        assert!(matches!(result, Err(ProcessError::CommandNotFound(_))));
    }

    #[test]
    fn test_launch_redirects_and_truncates() -> Result<(), Box<dyn std::error::Error>> {
        let executor = ProcessExecutor::new();
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.txt");
        fs::write(&out, "previous content that is longer\n")?;

        let line = format!("echo hi > {}", out.display());
        executor.launch(&invocation(&line), &system_path())?.join();

        assert_eq!(fs::read_to_string(&out)?, "hi\n");
        Ok(())
    }

    #[test]
    fn test_redirect_file_mode() -> Result<(), Box<dyn std::error::Error>> {
        let executor = ProcessExecutor::new();
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("fresh.txt");

        let line = format!("true > {}", out.display());
        executor.launch(&invocation(&line), &system_path())?.join();

        let mode = fs::metadata(&out)?.permissions().mode() & 0o777;
        // The process umask can only clear bits.
        assert_eq!(mode & !0o700, 0);
        assert_ne!(mode & 0o600, 0);
        Ok(())
    }

    #[test]
    fn test_launch_passes_arguments() -> Result<(), Box<dyn std::error::Error>> {
        let executor = ProcessExecutor::new();
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("args.txt");

        let line = format!("printf %s-%s one two>{}", out.display());
        executor.launch(&invocation(&line), &system_path())?.join();

        assert_eq!(fs::read_to_string(&out)?, "one-two");
        Ok(())
    }

    #[test]
    fn test_redirect_into_missing_directory() {
        let executor = ProcessExecutor::new();
        let result = executor.launch(
            &invocation("echo hi > /nonexistent/dir/out.txt"),
            &system_path(),
        );
        assert!(matches!(result, Err(ProcessError::Redirect(_, _))));
    }
}
