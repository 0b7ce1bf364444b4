//! Per-file coverage record and the map keyed by canonical path.

use crate::result::{CounterKind, MedirError, MedirResult};

use super::metadata::FileMetadata;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Coverage counters for one source file, keyed by canonical path.
///
/// Counter tables are zero-initialized from [`FileMetadata`] and never grow
/// afterwards: every key present in `l`, `f`, `b`, `s` was present in the
/// originating metadata, and incrementing an absent key is an integrity
/// error. The descriptor maps are carried through verbatim for downstream
/// report rendering.
///
/// Serializes to the downstream contract shape
/// `{path, l, s, b, f, fnMap, statementMap, branchMap}`.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageRecord {
    /// Canonical file path, this record's identity key
    pub path: String,
    /// Line number → hit count, one entry per runnable line
    pub l: BTreeMap<u32, u64>,
    /// Statement index → hit count
    pub s: BTreeMap<u32, u64>,
    /// Branch index → [false-slot count, true-slot count]
    pub b: BTreeMap<u32, [u64; 2]>,
    /// Function index → hit count
    pub f: BTreeMap<u32, u64>,
    /// Function descriptors from the instrumentation pass
    #[serde(rename = "fnMap")]
    pub fn_map: BTreeMap<u32, Value>,
    /// Statement descriptors from the instrumentation pass
    #[serde(rename = "statementMap")]
    pub statement_map: BTreeMap<u32, Value>,
    /// Branch descriptors from the instrumentation pass
    #[serde(rename = "branchMap")]
    pub branch_map: BTreeMap<u32, Value>,
}

impl CoverageRecord {
    /// Build a zeroed record for `canonical_path` from its metadata.
    #[must_use]
    pub fn zeroed(metadata: &FileMetadata, canonical_path: &str) -> Self {
        Self {
            path: canonical_path.to_string(),
            l: metadata.runnable_lines.iter().map(|&line| (line, 0)).collect(),
            f: metadata.fn_map.keys().map(|&idx| (idx, 0)).collect(),
            b: metadata.branch_map.keys().map(|&idx| (idx, [0, 0])).collect(),
            s: metadata.statement_map.keys().map(|&idx| (idx, 0)).collect(),
            fn_map: metadata.fn_map.clone(),
            statement_map: metadata.statement_map.clone(),
            branch_map: metadata.branch_map.clone(),
        }
    }

    /// Record one execution of a runnable line.
    pub fn hit_line(&mut self, line: u32) -> MedirResult<()> {
        let count = self.l.get_mut(&line).ok_or_else(|| MedirError::UnknownCounter {
            kind: CounterKind::Line,
            index: line,
            path: self.path.clone(),
        })?;
        *count += 1;
        Ok(())
    }

    /// Record one entry into the function at `index`.
    pub fn hit_function(&mut self, index: u32) -> MedirResult<()> {
        let count = self.f.get_mut(&index).ok_or_else(|| MedirError::UnknownCounter {
            kind: CounterKind::Function,
            index,
            path: self.path.clone(),
        })?;
        *count += 1;
        Ok(())
    }

    /// Record one taken outcome of the branch group at `index`.
    ///
    /// `outcome` selects the slot: 0 for the false-ish arm, 1 for true-ish.
    pub fn hit_branch(&mut self, index: u32, outcome: usize) -> MedirResult<()> {
        debug_assert!(outcome < 2, "outcome slot validated at decode time");
        let slots = self.b.get_mut(&index).ok_or_else(|| MedirError::UnknownCounter {
            kind: CounterKind::Branch,
            index,
            path: self.path.clone(),
        })?;
        slots[outcome] += 1;
        Ok(())
    }

    /// Record one execution of the statement at `index`.
    pub fn hit_statement(&mut self, index: u32) -> MedirResult<()> {
        let count = self.s.get_mut(&index).ok_or_else(|| MedirError::UnknownCounter {
            kind: CounterKind::Statement,
            index,
            path: self.path.clone(),
        })?;
        *count += 1;
        Ok(())
    }

    /// Hit count for a line, or `None` if the line is not runnable.
    #[must_use]
    pub fn line_hits(&self, line: u32) -> Option<u64> {
        self.l.get(&line).copied()
    }

    /// Hit count for a function index.
    #[must_use]
    pub fn function_hits(&self, index: u32) -> Option<u64> {
        self.f.get(&index).copied()
    }

    /// `[false, true]` slot counts for a branch index.
    #[must_use]
    pub fn branch_hits(&self, index: u32) -> Option<[u64; 2]> {
        self.b.get(&index).copied()
    }

    /// Hit count for a statement index.
    #[must_use]
    pub fn statement_hits(&self, index: u32) -> Option<u64> {
        self.s.get(&index).copied()
    }
}

/// Mapping from canonical file path → [`CoverageRecord`].
///
/// Returned by [`ReportRegistry::snapshot`](super::ReportRegistry::snapshot)
/// as a detached copy of live aggregation state: mutating a snapshot never
/// affects the registry.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CoverageMap(pub(crate) BTreeMap<String, CoverageRecord>);

impl CoverageMap {
    /// Record for a canonical path, if that file was initialized.
    #[must_use]
    pub fn get(&self, canonical_path: &str) -> Option<&CoverageRecord> {
        self.0.get(canonical_path)
    }

    /// Number of files in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no files have been initialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate records in canonical-path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CoverageRecord)> {
        self.0.iter().map(|(path, record)| (path.as_str(), record))
    }

    /// Sum another snapshot's counters into this one.
    ///
    /// Supports hosts that run tests across isolated processes, each with
    /// its own registry: summation is commutative and associative, so merge
    /// order is irrelevant. Files present only in `other` are copied in.
    pub fn merge(&mut self, other: &CoverageMap) {
        for (path, record) in &other.0 {
            match self.0.get_mut(path) {
                Some(existing) => {
                    for (line, count) in &record.l {
                        *existing.l.entry(*line).or_insert(0) += count;
                    }
                    for (idx, count) in &record.f {
                        *existing.f.entry(*idx).or_insert(0) += count;
                    }
                    for (idx, slots) in &record.b {
                        let entry = existing.b.entry(*idx).or_insert([0, 0]);
                        entry[0] += slots[0];
                        entry[1] += slots[1];
                    }
                    for (idx, count) in &record.s {
                        *existing.s.entry(*idx).or_insert(0) += count;
                    }
                }
                None => {
                    let _ = self.0.insert(path.clone(), record.clone());
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a CoverageMap {
    type Item = (&'a String, &'a CoverageRecord);
    type IntoIter = std::collections::btree_map::Iter<'a, String, CoverageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
