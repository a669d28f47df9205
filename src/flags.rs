use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
    scripts: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                value: None,
            },
        );

        flags.insert(
            "debug".to_string(),
            Flag {
                short: "-d".to_string(),
                long: "--debug".to_string(),
                description: "Log resolution, launches and joins to stderr".to_string(),
                value: None,
            },
        );

        Flags {
            flags,
            scripts: Vec::new(),
        }
    }

    /// Parses the command line (without the program name).
    ///
    /// Anything that is not a flag is a script path; after `--` everything is.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut only_scripts = false;

        for arg in args {
            if only_scripts || !arg.starts_with('-') || arg == "-" {
                self.scripts.push(arg.clone());
                continue;
            }
            if arg == "--" {
                only_scripts = true;
                continue;
            }

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("unknown flag {}", arg)))?;
            flag.value = Some("true".to_string());
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn print_help(&self) {
        println!("Usage: wish [OPTIONS] [SCRIPT]...");
        println!("\nWith no SCRIPT, read commands from the terminal.");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
