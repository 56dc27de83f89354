//! Typed errors for the tool shell.
//!
//! The engine itself is total over numeric input and never returns errors;
//! everything that can fail lives at the edges (files, parsing, config).
//! Categorized variants keep messages useful, and `anyhow` carries them at
//! the binary's top level.

use std::path::PathBuf;
use thiserror::Error;

/// Error category for scenario loading, config, and output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoiscopeError {
    /// File system I/O errors (read, write, permissions).
    #[error("I/O error: {message}{}", path_suffix(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// Scenario or config file parsing errors.
    #[error("parse error in {}: {message}", .path.display())]
    Parse { message: String, path: PathBuf },

    /// Configuration value problems.
    #[error("config error: {message}")]
    Config { message: String },

    /// Bad CLI-level input (unknown stream key, unknown format).
    #[error("invalid input: {message}")]
    Validation { message: String },
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" ({})", p.display()),
        None => String::new(),
    }
}

impl RoiscopeError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn parse(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_context() {
        let err = RoiscopeError::parse("unexpected token", "scenario.json");
        assert_eq!(
            err.to_string(),
            "parse error in scenario.json: unexpected token"
        );
    }

    #[test]
    fn io_without_path_stays_terse() {
        let err = RoiscopeError::io("stdout closed");
        assert_eq!(err.to_string(), "I/O error: stdout closed");
    }

    #[test]
    fn io_with_path_appends_location() {
        let err = RoiscopeError::io_with_path("permission denied", "out/report.md");
        assert_eq!(
            err.to_string(),
            "I/O error: permission denied (out/report.md)"
        );
    }
}
