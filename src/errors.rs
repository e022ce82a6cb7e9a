/*!
 * Error types for the pgosync application.
 *
 * This module contains custom error types for the different layers of the
 * application, using the thiserror crate for ergonomic error definitions.
 * Every error here is fatal: the file formats are positional, so a single
 * malformed line invalidates everything after it.
 */

use thiserror::Error;

/// Errors raised by the time codec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    /// Timestamp does not match the fixed-width `HH:MM:SS,mmm` pattern
    #[error("Invalid timestamp format: '{input}'")]
    InvalidFormat {
        /// The offending text
        input: String,
    },
}

/// Errors that can occur while decoding a PGO document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PgoError {
    /// The file ended before an expected line
    #[error("Unexpected end of file at line {line}: expected {expected}")]
    UnexpectedEof {
        /// 1-based number of the line that was expected
        line: usize,
        /// What the reader was looking for
        expected: String,
    },

    /// A numeric field did not parse as an integer
    #[error("Invalid integer for {field} at line {line}: '{value}'")]
    InvalidInteger {
        /// 1-based line number
        line: usize,
        /// Name of the field being read
        field: String,
        /// Raw token that failed to parse
        value: String,
    },

    /// A word or phoneme line has fewer tokens than required
    #[error("Missing {field} at line {line}")]
    MissingField {
        /// 1-based line number
        line: usize,
        /// Name of the missing token
        field: String,
    },
}

impl PgoError {
    /// Line number the error points at
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedEof { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::MissingField { line, .. } => *line,
        }
    }
}

/// Errors that can occur while decoding an SRT document
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SrtError {
    /// The time line of an otherwise complete block is malformed
    #[error("Invalid time range in subtitle block {block}: {source}")]
    Timestamp {
        /// 1-based block index in file order
        block: usize,
        /// Underlying codec error
        #[source]
        source: TimecodeError,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error decoding the PGO document
    #[error("PGO parse error: {0}")]
    Pgo(#[from] PgoError),

    /// Error decoding the SRT document
    #[error("SRT parse error: {0}")]
    Srt(#[from] SrtError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
