use std::ffi::CString;
use std::path::PathBuf;

/// Directories searched on a fresh start, in order.
pub const DEFAULT_SEARCH_PATH: [&str; 3] = ["./", "/usr/bin/", "/bin/"];

/// Ordered directory prefixes used to resolve external command names.
///
/// Every entry ends with `/`, so a candidate is just `entry + name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<String>,
}

impl Default for SearchPath {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SEARCH_PATH.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SearchPath {
    /// Builds a search path from directory names, appending a separator to each.
    ///
    /// Order and duplicates are kept; nothing checks that the directories exist.
    pub fn from_dirs<S: AsRef<str>>(dirs: &[S]) -> Self {
        Self {
            entries: dirs.iter().map(|d| format!("{}/", d.as_ref())).collect(),
        }
    }

    /// Drops every current entry in favour of `dirs`.
    pub fn replace<S: AsRef<str>>(&mut self, dirs: &[S]) {
        *self = Self::from_dirs(dirs);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first `entry + name` the current user may execute.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.entries
            .iter()
            .map(|entry| format!("{}{}", entry, name))
            .find(|candidate| is_executable(candidate))
            .map(PathBuf::from)
    }
}

/// `access(2)` with `X_OK`, the same check the kernel applies on exec.
fn is_executable(candidate: &str) -> bool {
    let Ok(c_path) = CString::new(candidate) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn make_file(dir: &std::path::Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").expect("write test file");
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).expect("chmod");
        path
    }

    #[test]
    fn test_default_entries() {
        let path = SearchPath::default();
        assert_eq!(path.entries(), ["./", "/usr/bin/", "/bin/"]);
    }

    #[test]
    fn test_replace_discards_previous_entries() {
        let mut path = SearchPath::default();
        path.replace(&["/opt/bin", "relative", "/opt/bin"]);
        assert_eq!(path.entries(), ["/opt/bin/", "relative/", "/opt/bin/"]);

        path.replace::<&str>(&[]);
        assert!(path.is_empty());
        assert_eq!(path.resolve("sh"), None);
    }

    #[test]
    fn test_resolve_first_executable_match() -> std::io::Result<()> {
        let first = tempfile::tempdir()?;
        let second = tempfile::tempdir()?;
        make_file(first.path(), "tool", 0o644);
        let expected = make_file(second.path(), "tool", 0o755);

        let dirs = [
            first.path().to_string_lossy().into_owned(),
            second.path().to_string_lossy().into_owned(),
        ];
        let path = SearchPath::from_dirs(&dirs);

        let resolved = path.resolve("tool").expect("tool should resolve");
        assert_eq!(fs::canonicalize(resolved)?, fs::canonicalize(expected)?);
        Ok(())
    }

    #[test]
    fn test_resolve_missing_command() -> std::io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = SearchPath::from_dirs(&[dir.path().to_string_lossy()]);
        assert_eq!(path.resolve("definitely-not-here"), None);
        Ok(())
    }

    #[test]
    fn test_resolve_rejects_interior_nul() {
        assert_eq!(SearchPath::default().resolve("s\0h"), None);
    }
}
