//! Event aggregation: fold a raw event stream into the registry.

use crate::result::{MedirError, MedirResult};

use super::event::{EventKind, RawEvent};
use super::path::resolve_canonical;
use super::payload::CoverageHit;
use super::record::CoverageMap;
use super::registry::ReportRegistry;
use std::path::Path;
use tracing::{debug, trace};

/// Consumes serialized log records and increments counters in a
/// [`ReportRegistry`].
///
/// Holds the registry's mutable borrow for the duration of an aggregation
/// pass, so two passes over the same registry cannot interleave. Counts
/// accumulate across [`process`](Self::process) calls; only
/// [`ReportRegistry::initialize`] resets a file.
#[derive(Debug)]
pub struct EventAggregator<'r> {
    registry: &'r mut ReportRegistry,
}

impl<'r> EventAggregator<'r> {
    /// Create an aggregator over `registry`.
    #[must_use]
    pub fn new(registry: &'r mut ReportRegistry) -> Self {
        Self { registry }
    }

    /// Process an ordered sequence of serialized event records and return a
    /// snapshot of the full coverage map.
    ///
    /// Each record is parsed, classified by topic, decoded, resolved
    /// against `path_prefix`, and applied. Records carrying none of the
    /// four reserved topics are skipped; every other failure is fatal
    /// (partial coverage data would silently mask integrity bugs).
    ///
    /// Counts are commutative per key, so input order never changes the
    /// final map, only which failure surfaces first.
    pub fn process(&mut self, events: &[String], path_prefix: &Path) -> MedirResult<CoverageMap> {
        for raw in events {
            let event: RawEvent =
                serde_json::from_str(raw).map_err(|e| MedirError::MalformedEvent {
                    message: e.to_string(),
                })?;
            let Some(kind) = EventKind::classify(&event.topics) else {
                debug!(topics = ?event.topics, "skipping non-coverage event");
                continue;
            };
            let hit = CoverageHit::decode(kind, &event.data)?;
            self.apply(&hit, path_prefix)?;
        }
        Ok(self.registry.snapshot())
    }

    /// Apply one decoded hit to its file's record.
    fn apply(&mut self, hit: &CoverageHit, path_prefix: &Path) -> MedirResult<()> {
        let canonical = resolve_canonical(path_prefix, hit.file_ref());
        trace!(path = canonical, hit = ?hit, "applying coverage hit");
        let record = self.registry.record_mut(&canonical)?;
        match *hit {
            CoverageHit::Line { line, .. } => record.hit_line(line),
            CoverageHit::Function { index, .. } => record.hit_function(index),
            CoverageHit::Branch { index, outcome, .. } => record.hit_branch(index, outcome),
            CoverageHit::Statement { index, .. } => record.hit_statement(index),
        }
    }
}
