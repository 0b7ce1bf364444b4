//! Medir: Coverage Aggregation Core
//!
//! Medir (Spanish: "to measure") turns the event stream emitted by
//! instrumented code into a structured coverage map: per-file tables of
//! line, function, branch, and statement hit counts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     MEDIR Architecture                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Per-file   │    │ Report     │    │ Event      │            │
//! │   │ Metadata   │───►│ Registry   │◄───│ Aggregator │            │
//! │   │            │    │ (zeroed)   │    │ (counts)   │            │
//! │   └────────────┘    └────────────┘    └─────▲──────┘            │
//! │                                             │                    │
//! │                                  raw instrumentation events     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The instrumentation pass (external) injects tracking markers into source
//! and produces per-file [`FileMetadata`]. Each test run emits log records;
//! [`EventAggregator::process`] classifies each record by topic, decodes its
//! payload, resolves the embedded file reference against the caller's path
//! prefix, and increments the matching counter in the [`ReportRegistry`].
//!
//! # Example
//!
//! ```
//! use medir::{EventAggregator, FileMetadata, ReportRegistry};
//! use std::path::Path;
//!
//! let meta: FileMetadata = serde_json::from_str(
//!     r#"{"runnableLines": [10], "fnMap": {}, "branchMap": {}, "statementMap": {}}"#,
//! ).unwrap();
//!
//! let mut registry = ReportRegistry::new();
//! registry.initialize(&meta, "/project/contracts/Foo.sol");
//!
//! let mut aggregator = EventAggregator::new(&mut registry);
//! let coverage = aggregator.process(&[], Path::new("/project/contracts")).unwrap();
//! assert_eq!(coverage.get("/project/contracts/Foo.sol").unwrap().line_hits(10), Some(0));
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod coverage;
mod result;

pub use coverage::{
    CoverageHit, CoverageMap, CoverageRecord, EventAggregator, EventKind, FileMetadata, RawEvent,
    ReportRegistry, BRANCH_TOPIC, FUNCTION_TOPIC, LINE_TOPIC, STATEMENT_TOPIC,
};
pub use result::{CounterKind, MedirError, MedirResult};
