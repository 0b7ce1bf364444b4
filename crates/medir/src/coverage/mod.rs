//! Coverage accounting: registry of per-file records plus event aggregation.
//!
//! Two components, used in sequence per file then across the whole run:
//!
//! - [`ReportRegistry`] holds one zero-initialized [`CoverageRecord`] per
//!   canonical file path, built from per-file [`FileMetadata`] before any
//!   execution events arrive.
//! - [`EventAggregator`] consumes an ordered sequence of raw log records,
//!   classifies each by topic, decodes its payload, resolves the embedded
//!   file reference to a canonical path, and increments the matching
//!   counter.
//!
//! Counts accumulate across [`EventAggregator::process`] calls; only
//! [`ReportRegistry::initialize`] resets a file's record.

mod aggregator;
mod event;
mod metadata;
mod path;
mod payload;
mod record;
mod registry;

pub use aggregator::EventAggregator;
pub use event::{EventKind, RawEvent, BRANCH_TOPIC, FUNCTION_TOPIC, LINE_TOPIC, STATEMENT_TOPIC};
pub use metadata::FileMetadata;
pub use payload::CoverageHit;
pub use record::{CoverageMap, CoverageRecord};
pub use registry::ReportRegistry;
