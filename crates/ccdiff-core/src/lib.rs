//! ccdiff core - semantic comparison of CCD configuration exports
//!
//! Two builds of the configuration pipeline export the same definitions as
//! trees of JSON files. This crate decides which records genuinely differ
//! between the two trees:
//! - Record model with closed, typed field values
//! - Normalization rules that drop cosmetic fields and neutral defaults
//! - Canonical encoding, frequency indexes and multiset diffing
//! - Closest-match lookup to help triage each discrepancy
//! - File discovery, loading and the tree comparison driver
//! - Human-readable report rendering

pub mod compare;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;
pub mod source;

// Re-export commonly used types
pub use compare::{compare_file, compare_records, compare_trees, CompareOptions};
pub use diff::{render_report, FileDiff, FrequencyIndex, MultisetDiff, TreeComparison};
pub use errors::{CcdDiffError, ExError, ExErrorKind, Result};
pub use model::{FieldValue, Record};
pub use rules::{normalize_entry, NormalizeOptions};
