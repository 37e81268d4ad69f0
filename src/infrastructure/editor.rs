//! Editor integration for entry files

use crate::error::{DevjError, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Session for editing a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait until the editor exits.
    ///
    /// The editor inherits the terminal.
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        debug!(program = %program, ?args, "launching editor");

        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            DevjError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DevjError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        match parts.split_first() {
            Some((program, args)) => (
                program.to_string(),
                args.iter().map(|s| s.to_string()).collect(),
            ),
            None => ("vim".to_string(), vec![]),
        }
    }
}
