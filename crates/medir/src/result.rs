//! Result and error types for Medir.

use thiserror::Error;

/// Result type for Medir operations
pub type MedirResult<T> = Result<T, MedirError>;

/// Counter table a coverage event indexes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    /// Line hit table (`l`)
    Line,
    /// Function hit table (`f`)
    Function,
    /// Branch hit table (`b`)
    Branch,
    /// Statement hit table (`s`)
    Statement,
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Function => "function",
            Self::Branch => "branch",
            Self::Statement => "statement",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while aggregating coverage events
#[derive(Debug, Error)]
pub enum MedirError {
    /// Event record could not be parsed as a structured payload
    #[error("Malformed event record: {message}")]
    MalformedEvent {
        /// Error message
        message: String,
    },

    /// Event data blob could not be decoded for its classified layout
    #[error("Malformed event payload: {message}")]
    MalformedPayload {
        /// Error message
        message: String,
    },

    /// Decoded numeric value exceeds the supported index domain
    #[error("Decoded value {value} exceeds the maximum supported index {max}")]
    ValueOutOfRange {
        /// Decoded value (decimal rendering, may be truncated for display)
        value: String,
        /// Maximum accepted value
        max: u64,
    },

    /// Event resolved to a file that was never initialized
    #[error("No coverage record for file: {path} (file was never initialized)")]
    UnknownFile {
        /// Resolved canonical path
        path: String,
    },

    /// Event references an index absent from the metadata-derived table
    #[error("No {kind} counter at index {index} for file: {path}")]
    UnknownCounter {
        /// Which counter table was indexed
        kind: CounterKind,
        /// Offending index (line number for `kind == Line`)
        index: u32,
        /// Canonical path of the record
        path: String,
    },
}
