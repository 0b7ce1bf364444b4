//! Raw log records and topic-based classification.
//!
//! Instrumented code emits log records tagged with fixed topic hashes. Four
//! of those hashes are reserved as coverage classification keys; their
//! values are a byte-for-byte contract shared with the instrumentation
//! pass. Anything else in the stream is unrelated and skipped.

use serde::Deserialize;

/// Topic hash marking a line-hit event
pub const LINE_TOPIC: &str = "b8995a65f405d9756b41a334f38d8ff0c93c4934e170d3c1429c3e7ca101014d";
/// Topic hash marking a function-hit event
pub const FUNCTION_TOPIC: &str = "d4ce765fd23c5cc3660249353d61ecd18ca60549dd62cb9ca350a4244de7b87f";
/// Topic hash marking a branch-hit event
pub const BRANCH_TOPIC: &str = "d4cf56ed5ba572684f02f889f12ac42d9583c8e3097802060e949bfbb3c1bff5";
/// Topic hash marking a statement-hit event
pub const STATEMENT_TOPIC: &str = "b51abbff580b3a34bbc725f2dc6f736e9d4b45a41293fd0084ad865a31fde0c8";

/// One serialized log record from the execution environment.
///
/// Self-describing: a set of topic hashes plus a single hex-encoded data
/// blob. Other fields carried by the host's log format are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    /// Topic hashes attached to this record
    pub topics: Vec<String>,
    /// Hex-encoded payload, with or without a `0x` prefix
    pub data: String,
}

/// Classification of a raw event against the four reserved topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A runnable line executed
    Line,
    /// A function was entered
    Function,
    /// A branch outcome was taken
    Branch,
    /// A statement executed
    Statement,
}

impl EventKind {
    /// Classify a topic set.
    ///
    /// Checked in fixed priority order (line, function, branch, statement);
    /// if a record somehow carries more than one reserved topic the first
    /// match wins. Returns `None` for unrelated records.
    #[must_use]
    pub fn classify(topics: &[String]) -> Option<Self> {
        const ORDER: [(&str, EventKind); 4] = [
            (LINE_TOPIC, EventKind::Line),
            (FUNCTION_TOPIC, EventKind::Function),
            (BRANCH_TOPIC, EventKind::Branch),
            (STATEMENT_TOPIC, EventKind::Statement),
        ];
        ORDER
            .into_iter()
            .find(|(topic, _)| topics.iter().any(|t| strip_hex_prefix(t) == *topic))
            .map(|(_, kind)| kind)
    }
}

/// Topic hashes may arrive `0x`-prefixed depending on the host's log format.
pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}
