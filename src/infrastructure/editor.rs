//! Editor integration for composing entry content

use crate::error::{JournError, Result};
use std::fs;
use std::process::Command;

/// Session for composing text in an external editor
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

    /// Open a scratch file in the editor, wait for it to close, and
    /// return what the user wrote (trailing newline trimmed)
    pub fn compose(&self) -> Result<String> {
        let (program, args) = self.parse_command();

        let scratch = std::env::temp_dir().join(format!("journ-entry-{}.txt", std::process::id()));
        fs::write(&scratch, "")?;

        let mut all_args = args;
        all_args.push(scratch.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        let status = if cfg!(windows) {
            Command::new("cmd")
                .arg("/C")
                .arg(&program)
                .args(&all_args)
                .status()
        } else {
            Command::new(&program).args(&all_args).status()
        };

        let status = match status {
            Ok(status) => status,
            Err(e) => {
                fs::remove_file(&scratch).ok();
                return Err(JournError::Editor(format!(
                    "Failed to launch editor '{}': {}",
                    program, e
                )));
            }
        };

        if !status.success() {
            fs::remove_file(&scratch).ok();
            return Err(JournError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        let content = fs::read_to_string(&scratch)?;
        fs::remove_file(&scratch).ok();

        Ok(content.trim_end_matches('\n').to_string())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
