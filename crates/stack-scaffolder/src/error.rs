//! Error types for project generation

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The project name broke one or more npm naming rules.
    #[error("Invalid project name '{name}': {}", errors.join("; "))]
    InvalidName { name: String, errors: Vec<String> },

    /// The target path could not be inspected before generation.
    #[error("Failed to check whether {} exists", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory or file could not be written while generating the project.
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A structured document could not be serialized.
    #[error("Failed to render {path}")]
    Render {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// An existing project directory could not be removed before overwriting it.
    #[error("Failed to remove existing directory {}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The terminal prompt failed (closed stdin, interrupted, ...).
    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    /// An answer did not match any known option.
    #[error("Unknown {question} option: '{value}'")]
    InvalidAnswer { question: String, value: String },

    /// An external command could not be run or exited unsuccessfully.
    #[error("Command `{command}` failed: {reason}")]
    Command { command: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_lists_every_violation() {
        let err = ScaffoldError::InvalidName {
            name: "My App".to_string(),
            errors: vec!["first".to_string(), "second".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("My App"));
        assert!(message.contains("first; second"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let err = ScaffoldError::Write {
            path: PathBuf::from("demo/package.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("demo/package.json"));
        assert!(err.source().is_some());
    }
}
