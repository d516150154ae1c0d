//! Generator error types
//!
//! Every variant is fatal for the run: `main` prints it and exits non-zero.
//! Declined writes are not errors and never show up here.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading manifests or producing artifacts
#[derive(Debug)]
pub enum GenError {
    /// A file could not be read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Comment-stripped manifest text is not valid JSON
    Parse {
        file: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// Valid JSON, but not the shape the manifest needs
    Shape { file: String, message: String },

    /// A color group lacks a required field (or has it empty)
    MissingField { field: &'static str, record: String },

    /// README template references an undefined or malformed placeholder
    Template { message: String },
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error from serde_json, keeping only the bare message.
    ///
    /// serde_json appends " at line N column M" to its Display output; the
    /// position is reported separately so it is cut off here.
    pub fn parse(file: impl Into<String>, err: &serde_json::Error) -> Self {
        let full = err.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        GenError::Parse {
            file: file.into(),
            line: err.line(),
            column: err.column(),
            message,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            GenError::Parse {
                file,
                line,
                column,
                message,
            } => write!(
                f,
                "Error parsing {} (line {}, column {}): {}",
                file, line, column, message
            ),
            GenError::Shape { file, message } => write!(f, "Invalid manifest {}: {}", file, message),
            GenError::MissingField { field, record } => {
                write!(f, "Missing required field '{}' in group: {}", field, record)
            }
            GenError::Template { message } => write!(f, "Template error: {}", message),
        }
    }
}

// No `source()`: Display already carries the io error text
impl std::error::Error for GenError {}
