//! Per-file instrumentation metadata.
//!
//! Produced by the (external) instrumentation pass alongside the marked-up
//! source. Descriptor payloads are opaque to this core: they are carried
//! through unchanged so downstream report renderers can map indices back to
//! names and source locations.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Instrumentation metadata for one source file.
///
/// Field names follow the wire contract with the instrumentation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Distinct positive line numbers eligible for line-coverage tracking,
    /// in source order.
    #[serde(rename = "runnableLines")]
    pub runnable_lines: Vec<u32>,

    /// 1-based function index → descriptor (name, location).
    #[serde(rename = "fnMap")]
    pub fn_map: BTreeMap<u32, Value>,

    /// 1-based branch-group index → descriptor. Each group has exactly two
    /// outcome slots (false, true).
    #[serde(rename = "branchMap")]
    pub branch_map: BTreeMap<u32, Value>,

    /// 1-based statement index → descriptor.
    #[serde(rename = "statementMap")]
    pub statement_map: BTreeMap<u32, Value>,
}
