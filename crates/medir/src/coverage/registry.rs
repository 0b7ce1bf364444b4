//! Report registry: the live, mutable coverage state for one session.

use crate::result::{MedirError, MedirResult};

use super::metadata::FileMetadata;
use super::record::{CoverageMap, CoverageRecord};

/// Holds one zeroed-then-accumulated [`CoverageRecord`] per canonical file
/// path.
///
/// Explicitly constructed and passed to whatever orchestrates test
/// execution; there is no ambient global instance. Lifecycle: create,
/// initialize every instrumented file, aggregate events any number of
/// times, snapshot. If the host parallelizes runs across isolated
/// processes, each owns its own registry and the caller merges snapshots
/// with [`CoverageMap::merge`].
#[derive(Debug, Default)]
pub struct ReportRegistry {
    coverage: CoverageMap,
}

impl ReportRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or overwrite) the zeroed coverage record for the file
    /// instrumented per `metadata` and located at `canonical_path`.
    ///
    /// Re-initializing a path discards any counts accumulated for it;
    /// calling twice with the same metadata yields an identical zeroed
    /// structure.
    pub fn initialize(&mut self, metadata: &FileMetadata, canonical_path: &str) {
        tracing::debug!(
            path = canonical_path,
            lines = metadata.runnable_lines.len(),
            functions = metadata.fn_map.len(),
            branches = metadata.branch_map.len(),
            statements = metadata.statement_map.len(),
            "initializing coverage record"
        );
        let record = CoverageRecord::zeroed(metadata, canonical_path);
        let _ = self.coverage.0.insert(canonical_path.to_string(), record);
    }

    /// Detached copy of the full coverage map.
    ///
    /// Callers hand this to report writers; mutating it cannot touch live
    /// aggregation state.
    #[must_use]
    pub fn snapshot(&self) -> CoverageMap {
        self.coverage.clone()
    }

    /// Whether `canonical_path` has an initialized record.
    #[must_use]
    pub fn contains(&self, canonical_path: &str) -> bool {
        self.coverage.0.contains_key(canonical_path)
    }

    /// Mutable record lookup for the aggregator.
    ///
    /// A missing path is a fatal integrity error: it means instrumentation
    /// and registry initialization disagree, and silently creating a record
    /// here would mask that bug.
    pub(crate) fn record_mut(&mut self, canonical_path: &str) -> MedirResult<&mut CoverageRecord> {
        self.coverage
            .0
            .get_mut(canonical_path)
            .ok_or_else(|| MedirError::UnknownFile {
                path: canonical_path.to_string(),
            })
    }
}
