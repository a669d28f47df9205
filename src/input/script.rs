//! Script-file input.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use super::{LineSource, ReadOutcome};
use crate::error::ShellError;

/// Opens the script arguments.
///
/// Every path must open for reading. When several are given they must all be
/// the same file (same device and inode); the first handle is returned.
pub fn open_scripts<P: AsRef<Path>>(paths: &[P]) -> Result<File, ShellError> {
    let mut first: Option<(PathBuf, File, (u64, u64))> = None;

    for path in paths {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| ShellError::ScriptUnreadable(path.to_path_buf(), e))?;
        let metadata = file
            .metadata()
            .map_err(|e| ShellError::ScriptUnreadable(path.to_path_buf(), e))?;
        let identity = (metadata.dev(), metadata.ino());

        match &first {
            None => first = Some((path.to_path_buf(), file, identity)),
            Some((first_path, _, first_identity)) => {
                if *first_identity != identity {
                    return Err(ShellError::ScriptMismatch(
                        first_path.clone(),
                        path.to_path_buf(),
                    ));
                }
            }
        }
    }

    first
        .map(|(_, file, _)| file)
        .ok_or_else(|| ShellError::FlagError("no script given".to_string()))
}

/// Reads lines from an already opened script until end of file.
pub struct ScriptSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl ScriptSource<BufReader<File>> {
    pub fn from_file(file: File) -> Self {
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self) -> Result<ReadOutcome, ShellError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }

        let mut line = String::from_utf8_lossy(&self.buf).into_owned();
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(ReadOutcome::Line(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;

    fn read_all<R: BufRead>(source: &mut ScriptSource<R>) -> Vec<String> {
        let mut lines = Vec::new();
        while let Ok(ReadOutcome::Line(line)) = source.read_line() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_reads_lines_and_final_unterminated_line() {
        let mut source = ScriptSource::new(Cursor::new("ls -la\r\n\npath /bin\nexit"));
        assert_eq!(read_all(&mut source), ["ls -la", "", "path /bin", "exit"]);
        assert!(matches!(source.read_line(), Ok(ReadOutcome::Eof)));
    }

    #[test]
    fn test_open_single_script() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = dir.path().join("batch.sh");
        fs::write(&script, "exit\n")?;

        let file = open_scripts(&[&script])?;
        let mut source = ScriptSource::from_file(file);
        assert_eq!(read_all(&mut source), ["exit"]);
        Ok(())
    }

    #[test]
    fn test_open_same_file_twice() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = dir.path().join("batch.sh");
        fs::write(&script, "exit\n")?;
        let link = dir.path().join("alias.sh");
        fs::hard_link(&script, &link)?;

        assert!(open_scripts(&[&script, &script]).is_ok());
        assert!(open_scripts(&[&script, &link]).is_ok());
        Ok(())
    }

    #[test]
    fn test_open_different_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let a = dir.path().join("a.sh");
        let b = dir.path().join("b.sh");
        fs::write(&a, "exit\n")?;
        fs::write(&b, "exit\n")?;

        assert!(matches!(
            open_scripts(&[&a, &b]),
            Err(ShellError::ScriptMismatch(_, _))
        ));
        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(
            open_scripts(&["/no/such/script"]),
            Err(ShellError::ScriptUnreadable(_, _))
        ));
    }
}
